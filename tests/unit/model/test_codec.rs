use monster_client::error::AppError;
use monster_client::model::responses::{OptionChainResponse, QuoteResponse};
use monster_client::presentation::quote::Price;
use monster_client::model::utils::{
    XmlResponse, from_xml, from_xml_with_root, root_element_name, to_xml,
};
use monster_client::presentation::option::{OptionContract, StrikePair};

#[test]
fn root_tag_must_match_with_its_prefix() {
    let body = br#"<getQuotesResponse><item><symbol>IBM</symbol></item></getQuotesResponse>"#;
    match from_xml::<QuoteResponse>(body) {
        Err(AppError::UnexpectedRoot { expected, found }) => {
            assert_eq!(expected, "ns2:getQuotesResponse");
            assert_eq!(found, "getQuotesResponse");
        }
        other => panic!("expected root mismatch, got {other:?}"),
    }
}

#[test]
fn other_prefix_is_rejected() {
    let body = br#"<ns3:getQuotesResponse xmlns:ns3="urn:q"/>"#;
    assert!(matches!(
        from_xml::<QuoteResponse>(body),
        Err(AppError::UnexpectedRoot { .. })
    ));
}

#[test]
fn quote_document_is_not_an_option_chain() {
    let body = br#"<ns2:getQuotesResponse xmlns:ns2="urn:q"></ns2:getQuotesResponse>"#;
    assert!(matches!(
        from_xml::<OptionChainResponse>(body),
        Err(AppError::UnexpectedRoot { .. })
    ));
}

#[test]
fn empty_response_decodes_to_no_items() {
    let body = br#"<ns2:getOptionChainResponse xmlns:ns2="urn:q"/>"#;
    let chain: OptionChainResponse = from_xml(body).unwrap();
    assert!(chain.items.is_empty());
    assert_eq!(chain.first_strike_pair(), None);
}

#[test]
fn root_element_name_reports_the_qualified_name() {
    let body = br#"<?xml version="1.0"?>
<ns2:getOptionChainResponse xmlns:ns2="urn:q"><item/></ns2:getOptionChainResponse>"#;
    assert_eq!(
        root_element_name(body).unwrap(),
        OptionChainResponse::ROOT
    );
}

#[test]
fn html_error_page_is_rejected() {
    let body = b"<html><body>Service unavailable</body></html>";
    match from_xml::<OptionChainResponse>(body) {
        Err(AppError::UnexpectedRoot { found, .. }) => assert_eq!(found, "html"),
        other => panic!("expected root mismatch, got {other:?}"),
    }
}

#[test]
fn non_xml_body_is_a_decode_error() {
    assert!(matches!(
        from_xml::<OptionChainResponse>(b"token expired"),
        Err(AppError::Deserialization(_))
    ));
}

#[test]
fn malformed_and_missing_scalars_decode_to_zero() {
    let body = br#"<ns2:getOptionChainResponse xmlns:ns2="urn:q"><item><order>first</order><daysToExpire></daysToExpire><option_Collection><strike>n/a</strike><call><instrument><optionable>yes</optionable><month>13.5</month></instrument></call></option_Collection></item></ns2:getOptionChainResponse>"#;
    let chain: OptionChainResponse = from_xml(body).unwrap();
    let item = &chain.items[0];
    assert_eq!(item.order, 0);
    assert_eq!(item.days_to_expire, 0);
    assert_eq!(item.expiry_label, "");

    let pair = &item.option_collection[0];
    assert_eq!(pair.strike, 0.0);
    assert!(!pair.call.instrument.optionable);
    assert_eq!(pair.call.instrument.month, 0);
    assert_eq!(pair.put, OptionContract::default());
}

#[test]
fn strike_pair_serializes_under_its_wire_name() {
    let pair = StrikePair {
        strike: 150.5,
        ..StrikePair::default()
    };
    let xml = to_xml(&pair).unwrap();
    assert!(xml.starts_with("<option_Collection><call>"));
    assert!(xml.contains("<strike>150.5</strike>"));
    assert!(xml.ends_with("</option_Collection>"));
}

#[test]
fn option_chain_decodes_under_a_configured_root() {
    let body = br#"<ns2:getQuotesResponse xmlns:ns2="urn:q"><item><order>1</order></item></ns2:getQuotesResponse>"#;
    let chain: OptionChainResponse = from_xml_with_root(body, "ns2:getQuotesResponse").unwrap();
    assert_eq!(chain.items.len(), 1);
    assert_eq!(chain.items[0].order, 1);

    match from_xml_with_root::<OptionChainResponse>(body, OptionChainResponse::ROOT) {
        Err(AppError::UnexpectedRoot { expected, found }) => {
            assert_eq!(expected, "ns2:getOptionChainResponse");
            assert_eq!(found, "ns2:getQuotesResponse");
        }
        other => panic!("expected root mismatch, got {other:?}"),
    }
}

#[test]
fn repeated_scalar_keeps_the_last_value() {
    let body = br#"<ns2:getOptionChainResponse xmlns:ns2="urn:q"><item><order>1</order><expiryLabel>Jan 17</expiryLabel><order>2</order><expiryLabel>Jan 24</expiryLabel></item></ns2:getOptionChainResponse>"#;
    let chain: OptionChainResponse = from_xml(body).unwrap();
    assert_eq!(chain.items[0].order, 2);
    assert_eq!(chain.items[0].expiry_label, "Jan 24");
}

#[test]
fn repeated_record_keeps_the_last_one() {
    let body = br#"<ns2:getOptionChainResponse xmlns:ns2="urn:q"><item><option_Collection><call><symbol>OLD</symbol></call><strike>150</strike><call><symbol>NEW</symbol></call></option_Collection></item></ns2:getOptionChainResponse>"#;
    let chain: OptionChainResponse = from_xml(body).unwrap();
    let pair = chain.first_strike_pair().unwrap();
    assert_eq!(pair.call.symbol, "NEW");
    assert_eq!(pair.strike, 150.0);
}

#[test]
fn child_elements_inside_scalars_are_skipped() {
    let body = br#"<ns2:getOptionChainResponse xmlns:ns2="urn:q"><item><order><v>1</v></order><expiryLabel><b>x</b></expiryLabel><daysToExpire>3</daysToExpire><option_Collection><call><instrument><tradeable><flag>true</flag></tradeable></instrument></call><strike>155</strike></option_Collection></item></ns2:getOptionChainResponse>"#;
    let chain: OptionChainResponse = from_xml(body).unwrap();
    let item = &chain.items[0];
    assert_eq!(item.order, 0);
    assert_eq!(item.expiry_label, "");
    assert_eq!(item.days_to_expire, 3);
    assert!(!item.option_collection[0].call.instrument.tradeable);
    assert_eq!(item.option_collection[0].strike, 155.0);
}

#[test]
fn quote_prices_tolerate_repeats_and_nested_noise() {
    let body = br#"<ns2:getQuotesResponse xmlns:ns2="urn:q"><item><symbol>IBM</symbol><bidPrice><amount>1</amount></bidPrice><bidPrice><amount>150.25</amount><currency><code>USD</code></currency></bidPrice></item></ns2:getQuotesResponse>"#;
    let quotes: QuoteResponse = from_xml(body).unwrap();
    let ibm = quotes.get("IBM").unwrap();
    assert_eq!(ibm.bid_price, Price::new(150.25, ""));
}
