//! Human-readable summary of a decode pass
//!
//! The report lists every decoded property with the fields that were set,
//! followed by the tokens the decoder did not recognize. With the
//! `colorized_output` feature, [`DecodeReport::format_colored`] adds
//! terminal styling to the same layout.

use std::fmt;

use crate::biis::{BiisError, DecodeFailure, DecodeNote, DecodeOutcome, NoteKind};
use crate::gif::{Container, Property, Valuation};

const FIELD_WIDTH: usize = 16;

/// Fields of one decoded property
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySummary {
    /// Object number, empty when the document had none
    pub key: String,
    /// Address label of the property
    pub label: Option<String>,
    /// Set fields of the property's valuation as (name, value)
    pub fields: Vec<(&'static str, String)>,
}

impl PropertySummary {
    fn new(key: &str, property: &Property) -> Self {
        let fields = property
            .valuations
            .values()
            .flat_map(valuation_fields)
            .collect();

        Self {
            key: key.to_string(),
            label: property.label.clone(),
            fields,
        }
    }

    /// Value of a field, if it was set
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Summary of one decoded document
#[derive(Debug, Clone)]
pub struct DecodeReport {
    /// Source the document was read from
    pub source: String,
    /// Decoded properties, in key order
    pub properties: Vec<PropertySummary>,
    /// Unrecognized tokens
    pub notes: Vec<DecodeNote>,
    /// Reason the decode stopped early
    pub stopped: Option<String>,
}

impl DecodeReport {
    /// Report on a completed decode
    pub fn from_outcome(source: impl Into<String>, outcome: &DecodeOutcome) -> Self {
        Self::from_parts(source, Some(&outcome.container), &outcome.notes, None)
    }

    /// Report on a decode that stopped early
    pub fn from_failure(source: impl Into<String>, failure: &DecodeFailure) -> Self {
        Self::from_parts(
            source,
            Some(failure.partial.as_ref()),
            &failure.notes,
            Some(&failure.error),
        )
    }

    /// Report assembled from the pieces a reader exposes
    pub fn from_parts(
        source: impl Into<String>,
        container: Option<&Container>,
        notes: &[DecodeNote],
        error: Option<&BiisError>,
    ) -> Self {
        let properties = container
            .map(|c| {
                c.data
                    .properties
                    .iter()
                    .map(|(key, property)| PropertySummary::new(key, property))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            source: source.into(),
            properties,
            notes: notes.to_vec(),
            stopped: error.map(ToString::to_string),
        }
    }

    /// True when the whole document was decoded
    pub fn is_complete(&self) -> bool {
        self.stopped.is_none()
    }

    /// Format the report with terminal styling (plain without the
    /// `colorized_output` feature)
    pub fn format_colored(&self) -> String {
        self.render(true)
    }

    fn status(&self) -> (String, Tone) {
        match &self.stopped {
            Some(reason) => (format!("stopped: {}", reason), Tone::Bad),
            None if self.notes.is_empty() => ("complete".to_string(), Tone::Good),
            None => ("complete with notes".to_string(), Tone::Warn),
        }
    }

    fn render(&self, colored: bool) -> String {
        let mut out = String::new();

        let (status, tone) = self.status();
        out.push_str(&format!(
            "{}  {}\n",
            paint(&self.source, Tone::Heading, colored),
            paint(&status, tone, colored)
        ));
        out.push_str(&format!(
            "{} {}, {} {}\n",
            self.properties.len(),
            plural(self.properties.len(), "property", "properties"),
            self.notes.len(),
            plural(self.notes.len(), "note", "notes"),
        ));

        for summary in &self.properties {
            let key = if summary.key.is_empty() {
                "(no object number)"
            } else {
                &summary.key
            };
            out.push('\n');
            out.push_str(&paint(key, Tone::Heading, colored));
            if let Some(label) = &summary.label {
                out.push_str(&format!("  {}", label));
            }
            out.push('\n');

            if summary.fields.is_empty() {
                out.push_str(&format!("    {}\n", paint("no fields set", Tone::Label, colored)));
            }
            for (name, value) in &summary.fields {
                let name = format!("{:<width$}", name, width = FIELD_WIDTH);
                out.push_str(&format!("    {}{}\n", paint(&name, Tone::Label, colored), value));
            }
        }

        if !self.notes.is_empty() {
            out.push('\n');
            out.push_str(&paint("unrecognized tokens", Tone::Heading, colored));
            out.push('\n');
            for note in &self.notes {
                let resolution = match note.kind {
                    NoteKind::Defaulted => "defaulted",
                    NoteKind::Unset => "left unset",
                };
                out.push_str(&format!(
                    "    {}  {}  {}\n",
                    leaf(&note.path),
                    paint(&format!("{:?}", note.token), Tone::Warn, colored),
                    resolution
                ));
            }
        }

        out
    }
}

impl fmt::Display for DecodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

#[derive(Debug, Clone, Copy)]
enum Tone {
    Heading,
    Label,
    Good,
    Warn,
    Bad,
}

fn paint(text: &str, tone: Tone, colored: bool) -> String {
    #[cfg(feature = "colorized_output")]
    {
        if colored {
            let styled = console::style(text);
            let styled = match tone {
                Tone::Heading => styled.bold(),
                Tone::Label => styled.dim(),
                Tone::Good => styled.green(),
                Tone::Warn => styled.yellow(),
                Tone::Bad => styled.red().bold(),
            };
            return styled.to_string();
        }
    }
    let _ = (tone, colored);
    text.to_string()
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}

/// Last two segments of a canonical path
fn leaf(path: &str) -> &str {
    match path.rmatch_indices('/').nth(1) {
        Some((i, _)) => &path[i + 1..],
        None => path,
    }
}

fn valuation_fields(v: &Valuation) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();
    let mut push = |name: &'static str, value: Option<String>| {
        if let Some(value) = value {
            fields.push((name, value));
        }
    };

    push("expert", v.expert_id.clone());
    push("expert name", v.expert_name.clone());
    push("owner", v.owner.clone());
    push("address", address_line(v));
    push("currency", v.currency.map(|c| c.code().to_string()));
    push("valid from", v.valid_from.map(|d| d.to_string()));
    push("area unit", v.area_measurement.map(|a| format!("{:?}", a)));
    push("primary use", v.use_type_primary.map(|u| format!("{:?}", u)));
    push("secondary use", v.use_type_secondary.map(|u| format!("{:?}", u)));
    push("phase", v.construction_phase.map(|p| format!("{:?}", p)));
    push("valuation type", v.valuation_type1.map(|t| format!("{:?}", t)));
    push(
        "key figures",
        (!v.key_figures.is_empty()).then(|| v.key_figures.len().to_string()),
    );
    fields
}

fn address_line(v: &Valuation) -> Option<String> {
    let a = &v.address;
    let town = match (&a.zip, &a.city) {
        (Some(zip), Some(city)) => Some(format!("{} {}", zip, city)),
        (zip, city) => zip.clone().or_else(|| city.clone()),
    };
    let parts: Vec<String> = [a.street.clone(), town, a.country.map(|c| c.code().to_string())]
        .into_iter()
        .flatten()
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}
