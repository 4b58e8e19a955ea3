use hamgen_core::{ErrorInfo, HamgenError};
use regex::Regex;

use crate::repr::Representation;
use crate::search::GenerationResult;

const FALLBACK_VALUE: &str = "0x00";

/// Renders generated values as a C `typedef enum` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTemplate {
    enum_name: String,
    member_names: Vec<String>,
}

impl EnumTemplate {
    /// Template with `MEMBER_1..MEMBER_n` members and `ENUM_NAME` as the type name.
    pub fn with_placeholders(member_count: usize) -> Self {
        Self {
            enum_name: "ENUM_NAME".to_string(),
            member_names: (1..=member_count).map(|idx| format!("MEMBER_{idx}")).collect(),
        }
    }

    /// Template with caller supplied names, which must be C identifiers.
    pub fn new(enum_name: impl Into<String>, member_names: Vec<String>) -> Result<Self, HamgenError> {
        let enum_name = enum_name.into();
        let identifier = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").map_err(|err| {
            HamgenError::Render(ErrorInfo::new("identifier-regex", err.to_string()))
        })?;
        for name in std::iter::once(&enum_name).chain(member_names.iter()) {
            if !identifier.is_match(name) {
                return Err(HamgenError::Render(
                    ErrorInfo::new("invalid-identifier", "enum names must be C identifiers")
                        .with_context("name", name.as_str()),
                ));
            }
        }
        Ok(Self {
            enum_name,
            member_names,
        })
    }

    /// Member names in declaration order.
    pub fn member_names(&self) -> &[String] {
        &self.member_names
    }

    /// Number of enum members.
    pub fn member_count(&self) -> usize {
        self.member_names.len()
    }

    /// Renders the declaration.
    ///
    /// Members without a generated value get `0x00`. Each consecutive pair of
    /// generated values is annotated with its Hamming distance.
    pub fn render(&self, result: &GenerationResult) -> String {
        let distances = result.codebook.neighbour_distances();
        let count = self.member_names.len();
        let mut out = String::from("typedef enum {\n");
        for (idx, name) in self.member_names.iter().enumerate() {
            let value = result
                .codewords
                .get(idx)
                .map(|text| literal(result.representation, text))
                .unwrap_or_else(|| FALLBACK_VALUE.to_string());
            let separator = if idx + 1 < count { "," } else { "" };
            out.push_str(&format!("\t{name} = {value}{separator}\n"));
            if idx + 1 < count {
                if let Some(distance) = distances.get(idx) {
                    out.push_str(&format!("\t/* hamming distance is {distance} */\n"));
                }
            }
        }
        out.push_str(&format!("}} {};", self.enum_name));
        out
    }
}

fn literal(representation: Representation, text: &str) -> String {
    match representation {
        Representation::Binary => format!("0b{text}"),
        Representation::Decimal | Representation::Hexadecimal => text.to_string(),
    }
}
