//! Line classification.

/// What a single report line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Unknown,
    /// `PiAware master process (piaware) is running with pid 25826.`
    Module,
    /// `faup1090 is connected to the ADS-B receiver.`
    Connection,
    /// `dump1090 is producing data on localhost:30005.`
    DumpEndpoint,
    /// `Your feeder ID is 335bb436-... (from /var/cache/piaware/feeder_id)`
    FeederId,
    /// `FR24 Link: connected [UDP].` or `Receiver: connected (...)`
    Fr24,
}

/// Prefix rules in priority order; the first match wins.
const RULES: &[(&[&str], LineKind)] = &[
    (&["PiAware ", "Local ADS-B"], LineKind::Module),
    (
        &["dump1090-fa", "faup1090 is", "piaware is"],
        LineKind::Connection,
    ),
    (&["dump1090 is "], LineKind::DumpEndpoint),
    (&["Your feeder ID is"], LineKind::FeederId),
];

/// Classify one line of a status report by its literal prefix.
///
/// fr24feed lines are recognized by their first word, ignoring case, once
/// no piaware rule matched.
pub fn classify(line: &str) -> LineKind {
    RULES
        .iter()
        .find(|(prefixes, _)| prefixes.iter().any(|p| line.starts_with(p)))
        .map(|(_, kind)| *kind)
        .unwrap_or_else(|| classify_fr24(line))
}

fn classify_fr24(line: &str) -> LineKind {
    let first = line.split(' ').next().unwrap_or_default();
    if first.eq_ignore_ascii_case("FR24") || first.eq_ignore_ascii_case("Receiver:") {
        LineKind::Fr24
    } else {
        LineKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_lines() {
        assert_eq!(
            classify("PiAware master process (piaware) is running with pid 25826."),
            LineKind::Module
        );
        assert_eq!(
            classify("Local ADS-B receiver (dump1090-fa) is running with pid 3739."),
            LineKind::Module
        );
    }

    #[test]
    fn test_connection_lines() {
        assert_eq!(
            classify("dump1090-fa (pid 3739) is listening for ES connections on port 30005."),
            LineKind::Connection
        );
        assert_eq!(
            classify("faup1090 is connected to the ADS-B receiver."),
            LineKind::Connection
        );
        assert_eq!(
            classify("piaware is connected to FlightAware."),
            LineKind::Connection
        );
    }

    #[test]
    fn test_endpoint_and_feeder_id_lines() {
        assert_eq!(
            classify("dump1090 is producing data on localhost:30005."),
            LineKind::DumpEndpoint
        );
        assert_eq!(
            classify("Your feeder ID is 335bb436-4746-41d3-81b1-ce05b8ba8ecb (from /var/cache/piaware/feeder_id)"),
            LineKind::FeederId
        );
    }

    #[test]
    fn test_prefixes_are_literal() {
        // Decoder prefix must not swallow the endpoint line and vice versa.
        assert_eq!(classify("dump1090 is "), LineKind::DumpEndpoint);
        assert_eq!(classify("dump1090-fa is listening"), LineKind::Connection);
        // Case and leading whitespace matter.
        assert_eq!(classify("piAware master process"), LineKind::Unknown);
        assert_eq!(classify(" PiAware master process"), LineKind::Unknown);
        assert_eq!(classify("PiAware"), LineKind::Unknown);
    }

    #[test]
    fn test_fr24_lines() {
        for line in [
            "FR24 Feeder/Decoder Process: running.",
            "FR24 Link: connected [UDP].",
            "Receiver: connected (3278019 MSGS/0 SYNC).",
            "fr24 MLAT: ok [UDP].",
            "RECEIVER: down.",
        ] {
            assert_eq!(classify(line), LineKind::Fr24, "{}", line);
        }
        assert_eq!(classify("FR24Link: connected."), LineKind::Unknown);
        assert_eq!(classify("Receiver connected."), LineKind::Unknown);
        assert_eq!(classify(" FR24 Link: connected."), LineKind::Unknown);
    }

    #[test]
    fn test_unknown_lines() {
        assert_eq!(classify(""), LineKind::Unknown);
        assert_eq!(classify("faup978 is connected to the UAT receiver."), LineKind::Unknown);
        assert_eq!(classify("Some other chatter"), LineKind::Unknown);
    }
}
