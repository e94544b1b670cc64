/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! XML codec helpers
//!
//! The service does not publish a schema we can validate against, so decoding is
//! deliberately lossy: scalar fields go through [`lenient`] / [`lenient_bool`] and
//! end up as their zero value when absent, empty or malformed. The only structural
//! check is the qualified name of the document root.

use crate::error::AppError;
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::de::{self, DeserializeOwned, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use tracing::debug;

// key quick-xml gives the text content of an element read as a map
const TEXT_KEY: &str = "$text";

/// A response document identified by the qualified name of its root element
pub trait XmlResponse: DeserializeOwned {
    /// Root element name, namespace prefix included (e.g. `ns2:getQuotesResponse`)
    const ROOT: &'static str;
}

/// Text content of one scalar element
///
/// Child elements are skipped and only the element's own text is kept, so
/// `<order><v>1</v></order>` reads as empty.
struct ScalarText(Option<String>);

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarTextVisitor)
    }
}

struct ScalarTextVisitor;

impl<'de> Visitor<'de> for ScalarTextVisitor {
    type Value = ScalarText;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an element with text content")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ScalarText(Some(v.to_owned())))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ScalarText(Some(v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ScalarText(None))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut text = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == TEXT_KEY {
                text = Some(map.next_value::<String>()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(ScalarText(text))
    }
}

/// Keeps the last of a run of same-named elements
struct LastOf<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for LastOf<T> {
    type Value = Option<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("one or more elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut last = None;
        while let Some(value) = seq.next_element::<T>()? {
            last = Some(value);
        }
        Ok(last)
    }
}

// Requesting a sequence makes the XML deserializer collect every element with
// the field's name, so a repeated element is consumed here instead of tripping
// the derived duplicate-field check.
fn last_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let last = deserializer.deserialize_seq(LastOf::<ScalarText>(PhantomData))?;
    Ok(last.and_then(|scalar| scalar.0))
}

/// Deserializes a scalar from its text content, yielding `T::default()` when the
/// element is missing, empty, holds only child elements or does not parse
///
/// A repeated element keeps its last value.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    Ok(last_text(deserializer)?
        .and_then(|text| text.trim().parse::<T>().ok())
        .unwrap_or_default())
}

/// Boolean variant of [`lenient`] that also understands `1`/`0` and `t`/`f`
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(
        last_text(deserializer)?.as_deref().map(str::trim),
        Some("1" | "t" | "T" | "true" | "TRUE" | "True")
    ))
}

/// Deserializes a nested record, keeping the last one when the element repeats
pub fn last_wins<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(deserializer
        .deserialize_seq(LastOf::<T>(PhantomData))?
        .unwrap_or_default())
}

/// Serializes a request document; element order follows field declaration order
pub fn to_xml<T: Serialize>(document: &T) -> Result<String, AppError> {
    quick_xml::se::to_string(document).map_err(|e| AppError::Serialization(e.to_string()))
}

/// Returns the qualified name of the first element in `body`
pub fn root_element_name(body: &[u8]) -> Result<String, AppError> {
    let mut reader = Reader::from_reader(body);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => {
                return Err(AppError::Deserialization(
                    "document has no root element".to_string(),
                ));
            }
            Ok(_) => {}
            Err(e) => return Err(AppError::Deserialization(e.to_string())),
        }
        buf.clear();
    }
}

/// Decodes a response document after checking its root element
///
/// The root must match [`XmlResponse::ROOT`] exactly, prefix included; a bare
/// local-name match is rejected.
pub fn from_xml<T: XmlResponse>(body: &[u8]) -> Result<T, AppError> {
    from_xml_with_root(body, T::ROOT)
}

/// Same as [`from_xml`] but checks the root against `expected`
pub fn from_xml_with_root<T: DeserializeOwned>(
    body: &[u8],
    expected: &str,
) -> Result<T, AppError> {
    let found = root_element_name(body)?;
    if found != expected {
        return Err(AppError::UnexpectedRoot {
            expected: expected.to_string(),
            found,
        });
    }

    let text = std::str::from_utf8(body).map_err(|e| AppError::Deserialization(e.to_string()))?;
    let document: T =
        quick_xml::de::from_str(text).map_err(|e| AppError::Deserialization(e.to_string()))?;
    debug!("Decoded <{}> document", expected);
    Ok(document)
}
