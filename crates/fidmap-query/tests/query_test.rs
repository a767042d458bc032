//! Integration tests for lookups against a snapshot-built topology

use fidmap_fid::{Fid, ObjType};
use fidmap_query::{render_records, FixedHost, OutputFormat, QueryEngine, QueryMiss};
use fidmap_topology::{build_topology, Snapshot, Topology};

const SNAPSHOT: &str = r#"[
    {"key": "m0conf/nodes/0x6e00000000000001:0x3", "value": "{\"name\": \"node1\"}"},
    {"key": "m0conf/nodes/node1/processes/6/services/confd", "value": "{}"},
    {"key": "m0conf/nodes/node1/processes/9/services/ios", "value": "{}"},
    {"key": "m0conf/nodes/node1/processes/10/services/ios", "value": "{}"},
    {"key": "m0conf/nodes/0x6e00000000000001:0x4", "value": "{\"name\": \"node2\"}"},
    {"key": "m0conf/nodes/node2/processes/20/services/m0_client_s3", "value": "{}"}
]"#;

fn topology() -> Topology {
    build_topology(&Snapshot::from_json(SNAPSHOT).expect("snapshot parses")).expect("topology builds")
}

#[test]
fn test_missing_node_is_nothing_found() {
    let topology = topology();
    let engine = QueryEngine::new(&topology, FixedHost::new("node1"));

    let result = engine.query_single(Some("missing"), None);
    assert!(matches!(result, Err(QueryMiss::NodeNotFound { node }) if node == "missing"));
}

#[test]
fn test_ioservice_filter() {
    let topology = topology();
    let engine = QueryEngine::new(&topology, FixedHost::new("node2"));

    let records = engine.query_single(Some("node1"), Some("ioservice")).unwrap();
    let fids: Vec<Fid> = records.iter().map(|r| r.fid).collect();
    assert_eq!(fids, vec![ObjType::Process.fid(9), ObjType::Process.fid(10)]);
}

#[test]
fn test_local_host_lookup_renders_json() {
    let topology = topology();
    let engine = QueryEngine::new(&topology, FixedHost::new("node2"));

    let records = engine.query_single(None, Some("s3server")).unwrap();
    let output = render_records(&records, OutputFormat::Json);
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0]["fid"], "0x7200000000000001:0x14");
    let fid: Fid = parsed[0]["fid"].as_str().unwrap().parse().unwrap();
    assert_eq!(ObjType::of(&fid), Some(ObjType::Process));
}
