//! Producer configuration
//!
//! The producer takes exactly two parameters:
//!
//! | Name              | Type      | Default              | Meaning                        |
//! |-------------------|-----------|----------------------|--------------------------------|
//! | `stage2JetSource` | input tag | `caloStage2Digis:MP` | Jet collection from Stage 2    |
//! | `jetLsb`          | double    | `0.5`                | LSB for jet et scale (GeV)     |
//!
//! Input tags follow the `label[:instance[:process]]` convention and are
//! stored inline so the configuration needs no heap.

use core::fmt;
use core::str::FromStr;

use heapless::String;

use crate::{
    constants::scales::{DEFAULT_JET_LSB_GEV, DEFAULT_JET_SOURCE, MAX_TAG_COMPONENT_LEN},
    convert::JetConverter,
    errors::{ConversionError, ConversionResult},
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Inline string for one input-tag component
pub type TagComponent = String<MAX_TAG_COMPONENT_LEN>;

/// Reference to a product: module label, instance and process
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputTag {
    /// Label of the producing module
    pub label: TagComponent,
    /// Product instance, empty for the default product
    pub instance: TagComponent,
    /// Process name, empty for the most recent process
    pub process: TagComponent,
}

impl InputTag {
    /// Parse `label[:instance[:process]]`
    pub fn parse(tag: &str) -> ConversionResult<Self> {
        let mut parts = tag.split(':');
        let label = component(parts.next().unwrap_or(""))?;
        let instance = component(parts.next().unwrap_or(""))?;
        let process = component(parts.next().unwrap_or(""))?;

        if parts.next().is_some() {
            return Err(ConversionError::InvalidConfig {
                reason: "input tag has more than three components",
            });
        }

        Ok(Self { label, instance, process })
    }

    /// Whether the tag names no module at all
    pub fn is_empty(&self) -> bool {
        self.label.is_empty()
    }
}

impl FromStr for InputTag {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for InputTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)?;
        if !self.instance.is_empty() || !self.process.is_empty() {
            write!(f, ":{}", self.instance)?;
        }
        if !self.process.is_empty() {
            write!(f, ":{}", self.process)?;
        }
        Ok(())
    }
}

// Tags travel as their `label:instance:process` string form
#[cfg(feature = "serde")]
impl serde::Serialize for InputTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut encoded: String<{ 3 * MAX_TAG_COMPONENT_LEN + 2 }> = String::new();
        fmt::Write::write_fmt(&mut encoded, format_args!("{}", self))
            .map_err(|_| serde::ser::Error::custom("input tag too long"))?;
        serializer.serialize_str(&encoded)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for InputTag {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TagVisitor;

        impl<'de> serde::de::Visitor<'de> for TagVisitor {
            type Value = InputTag;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an input tag of the form label[:instance[:process]]")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<InputTag, E> {
                InputTag::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TagVisitor)
    }
}

fn component(part: &str) -> ConversionResult<TagComponent> {
    TagComponent::try_from(part.trim()).map_err(|_| ConversionError::InvalidConfig {
        reason: "input tag component too long",
    })
}

/// Parameters of the jet producer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProducerConfig {
    /// Hardware jet collection to convert
    #[cfg_attr(feature = "serde", serde(rename = "stage2JetSource"))]
    pub jet_source: InputTag,
    /// GeV per hardware pt count
    pub jet_lsb: f64,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            jet_source: InputTag::parse(DEFAULT_JET_SOURCE).unwrap_or_default(),
            jet_lsb: DEFAULT_JET_LSB_GEV,
        }
    }
}

impl ProducerConfig {
    /// Configuration with an explicit source and LSB
    pub fn new(jet_source: &str, jet_lsb: f64) -> ConversionResult<Self> {
        let config = Self {
            jet_source: InputTag::parse(jet_source)?,
            jet_lsb,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the parameters before any conversion runs
    pub fn validate(&self) -> ConversionResult<()> {
        if self.jet_source.is_empty() {
            return Err(ConversionError::InvalidConfig {
                reason: "stage2JetSource has no module label",
            });
        }

        if !self.jet_lsb.is_finite() || self.jet_lsb < 0.0 {
            return Err(ConversionError::InvalidScale { value: self.jet_lsb });
        }

        if self.jet_lsb == 0.0 {
            log_warn!("jetLsb is 0, every converted jet will have pt = 0");
        }

        Ok(())
    }

    /// Converter for this configuration's energy scale
    pub fn converter(&self) -> ConversionResult<JetConverter> {
        JetConverter::new(self.jet_lsb)
    }
}
