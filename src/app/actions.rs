//! Inbound care actions.
//!
//! These represent the three ways an external caller (HTTP handler,
//! CLI, admin console) may mutate a record. The transport hands the
//! service a raw `(kind, text)` pair; parsing lives here so the
//! "unknown kind is a silent no-op" rule has exactly one home.

/// An action requested by the outside world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Record one feeding, subject to the daily cap.
    Feed,
    /// Record one medication dose, subject to the plan and daily cap.
    Medicate,
    /// Append a free-text care note.
    Annotate { text: String },
}

impl Action {
    /// Parse the transport's raw action kind.
    ///
    /// Returns `None` for any kind outside the known set; the caller
    /// treats that as a no-op against the unchanged record, never as
    /// an error.
    pub fn parse(kind: &str, text: Option<&str>) -> Option<Self> {
        match kind {
            "feed" => Some(Self::Feed),
            "medicate" => Some(Self::Medicate),
            "annotate" => Some(Self::Annotate {
                text: text.unwrap_or_default().to_owned(),
            }),
            _ => None,
        }
    }
}
