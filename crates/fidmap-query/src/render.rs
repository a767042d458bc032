//! Render query results in various formats

use fidmap_topology::{ServiceRecord, Topology};

/// Output format for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Expected: text or json", s)),
        }
    }
}

/// Render a list of service records
pub fn render_records(records: &[&ServiceRecord], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => records
            .iter()
            .map(|record| format!("{} {}\n", record.name, record.fid))
            .collect(),
        OutputFormat::Json => to_json(&records),
    }
}

/// Render every node with its services
pub fn render_topology(topology: &Topology, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for node in topology.nodes() {
                output.push_str(&format!("{}\n", node.name));
                for record in &node.services {
                    output.push_str(&format!("  {} {}\n", record.name, record.fid));
                }
            }
            output
        }
        OutputFormat::Json => to_json(topology),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    let mut text = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e));
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use fidmap_topology::{build_topology, KvPair, Snapshot};

    fn make_topology() -> Topology {
        let pairs = vec![
            KvPair::new("m0conf/nodes/N1", r#"{"name": "node1"}"#),
            KvPair::new("m0conf/nodes/N1/processes/7/services/confd", "{}"),
            KvPair::new("m0conf/nodes/N1/processes/9/services/ios", "{}"),
        ];
        build_topology(&Snapshot::from_pairs(pairs)).unwrap()
    }

    #[test]
    fn test_render_records_text() {
        let topology = make_topology();
        let records: Vec<_> = topology.nodes()[0].services.iter().collect();
        assert_eq!(
            render_records(&records, OutputFormat::Text),
            "confd 0x7200000000000001:0x7\nioservice 0x7200000000000001:0x9\n"
        );
    }

    #[test]
    fn test_render_records_json() {
        let topology = make_topology();
        let records: Vec<_> = topology.nodes()[0].services.iter().take(1).collect();
        let expected = "[\n  {\n    \"name\": \"confd\",\n    \"fid\": \"0x7200000000000001:0x7\"\n  }\n]\n";
        assert_eq!(render_records(&records, OutputFormat::Json), expected);
    }

    #[test]
    fn test_render_topology_text() {
        let topology = make_topology();
        assert_eq!(
            render_topology(&topology, OutputFormat::Text),
            "node1\n  confd 0x7200000000000001:0x7\n  ioservice 0x7200000000000001:0x9\n"
        );
    }

    #[test]
    fn test_render_topology_json() {
        let topology = make_topology();
        let output = render_topology(&topology, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["name"], "node1");
        assert_eq!(parsed[0]["services"][1]["name"], "ioservice");
        assert!(output.contains("\n  {\n    \"name\": \"node1\""));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("TXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
