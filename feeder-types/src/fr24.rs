//! fr24feed status fields.
//!
//! `fr24feed-status` prints one `Label: value.` line per field instead of
//! the module lines piaware uses:
//!
//! ```text
//! FR24 Feeder/Decoder Process: running.
//! FR24 Link: connected [UDP].
//! Receiver: connected (3278019 MSGS/0 SYNC).
//! ```

/// A field of an fr24feed status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Fr24Field {
    FeederDecoder,
    StatsTimestamp,
    Link,
    Radar,
    TrackedAircraft,
    Receiver,
    Mlat,
    MlatAircraftSeen,
    #[default]
    Unknown,
}

/// Folded labels, see [`Fr24Field::from_label`].
const FIELD_LABELS: &[(&str, Fr24Field)] = &[
    ("feederdecoderprocess", Fr24Field::FeederDecoder),
    ("statstimestamp", Fr24Field::StatsTimestamp),
    ("link", Fr24Field::Link),
    ("radar", Fr24Field::Radar),
    ("trackedac", Fr24Field::TrackedAircraft),
    ("receiver", Fr24Field::Receiver),
    ("mlat", Fr24Field::Mlat),
    ("mlatacseen", Fr24Field::MlatAircraftSeen),
];

impl Fr24Field {
    /// Map the label before the colon to a field.
    ///
    /// Case, whitespace, `/`, `_`, `-` and a leading `FR24` are ignored, so
    /// `FR24 Feeder/Decoder Process` and `feeder_decoder process` are the
    /// same field.
    pub fn from_label(label: &str) -> Self {
        let folded: String = label
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '/' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        let folded = folded.strip_prefix("fr24").unwrap_or(&folded);

        FIELD_LABELS
            .iter()
            .find(|(literal, _)| *literal == folded)
            .map(|(_, field)| *field)
            .unwrap_or(Fr24Field::Unknown)
    }
}

/// State of one fr24feed link (upstream, receiver or MLAT).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fr24Link {
    pub connected: bool,
    /// Transport or counters, e.g. `UDP` or `3278019 MSGS/0 SYNC`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub detail: Option<String>,
}

/// Everything an fr24feed status report says. Fields the report did not
/// print stay `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Fr24Status {
    pub feeder_running: Option<bool>,
    pub stats_timestamp: Option<String>,
    pub link: Option<Fr24Link>,
    pub radar: Option<String>,
    pub tracked_aircraft: Option<u32>,
    pub receiver: Option<Fr24Link>,
    pub mlat: Option<Fr24Link>,
    pub mlat_aircraft_seen: Option<u32>,
}

impl Fr24Status {
    /// True when no field was reported.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True when the feeder process is reported stopped, or the upstream
    /// link or the receiver is reported disconnected.
    ///
    /// MLAT is not required for feeding and never makes the status critical.
    pub fn is_critical(&self) -> bool {
        let down = |link: &Option<Fr24Link>| link.as_ref().is_some_and(|l| !l.connected);
        self.feeder_running == Some(false) || down(&self.link) || down(&self.receiver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(connected: bool) -> Option<Fr24Link> {
        Some(Fr24Link {
            connected,
            detail: None,
        })
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(
            Fr24Field::from_label("FR24 Feeder/Decoder Process"),
            Fr24Field::FeederDecoder
        );
        assert_eq!(Fr24Field::from_label("FR24 Stats Timestamp"), Fr24Field::StatsTimestamp);
        assert_eq!(Fr24Field::from_label("FR24 Link"), Fr24Field::Link);
        assert_eq!(Fr24Field::from_label("FR24 Radar"), Fr24Field::Radar);
        assert_eq!(Fr24Field::from_label("FR24 Tracked AC"), Fr24Field::TrackedAircraft);
        assert_eq!(Fr24Field::from_label("Receiver"), Fr24Field::Receiver);
        assert_eq!(Fr24Field::from_label("FR24 MLAT"), Fr24Field::Mlat);
        assert_eq!(Fr24Field::from_label("FR24 MLAT AC seen"), Fr24Field::MlatAircraftSeen);
    }

    #[test]
    fn test_field_labels_are_folded() {
        assert_eq!(
            Fr24Field::from_label("fr24 feeder_decoder process"),
            Fr24Field::FeederDecoder
        );
        assert_eq!(Fr24Field::from_label("  RECEIVER "), Fr24Field::Receiver);
        assert_eq!(Fr24Field::from_label("FR24"), Fr24Field::Unknown);
        assert_eq!(Fr24Field::from_label("FR24 Uptime"), Fr24Field::Unknown);
    }

    #[test]
    fn test_empty_status() {
        let status = Fr24Status::default();
        assert!(status.is_empty());
        assert!(!status.is_critical());
    }

    #[test]
    fn test_critical_status() {
        let healthy = Fr24Status {
            feeder_running: Some(true),
            link: link(true),
            receiver: link(true),
            mlat: link(false),
            ..Default::default()
        };
        assert!(!healthy.is_critical());

        let stopped = Fr24Status {
            feeder_running: Some(false),
            ..healthy.clone()
        };
        assert!(stopped.is_critical());

        let offline = Fr24Status {
            link: link(false),
            ..healthy.clone()
        };
        assert!(offline.is_critical());

        let no_receiver = Fr24Status {
            receiver: link(false),
            ..healthy
        };
        assert!(no_receiver.is_critical());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_skips_missing_detail() {
        let status = Fr24Status {
            link: Some(Fr24Link {
                connected: true,
                detail: Some("UDP".to_string()),
            }),
            receiver: link(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["link"]["detail"], "UDP");
        assert!(json["receiver"].get("detail").is_none());

        let parsed: Fr24Status = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, status);
    }
}
