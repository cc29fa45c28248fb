//! Node-status mode (`--free`): hard/soft state, slot counts and
//! reservations per node, dead nodes hidden unless asked for.

use crate::config::Config;
use crate::display::Table;
use crate::{Cli, Result};
use oarview_api::OarApiClient;
use oarview_core::{truncate_text, NodeStatus, SiteStatus};

pub async fn handle(cli: &Cli, site: &str, config: &Config) -> Result<()> {
    let client = OarApiClient::from_config(config)?;

    let status = client.site_status(site).await?;
    let visible = filter_nodes(&status, cli.dead);
    let total = visible.len();

    let limit = cli.results.unwrap_or(usize::MAX);

    let mut table = Table::new(vec![
        "HOST".to_string(),
        "HARD".to_string(),
        "SOFT".to_string(),
        "BUSY".to_string(),
        "FREE".to_string(),
        "RESERVED".to_string(),
        "COMMENT".to_string(),
    ]);

    let mut shown = 0usize;
    for (host, node) in visible.into_iter().take(limit) {
        let reserved = if node.has_reservation() { "yes" } else { "no" };
        table.add_row(vec![
            host.clone(),
            node.hard.clone(),
            node.soft.clone(),
            node.busy_slots.to_string(),
            node.free_slots.to_string(),
            reserved.to_string(),
            truncate_text(node.comment.as_deref().unwrap_or(""), cli.textmax),
        ]);
        shown += 1;
    }

    table.print();
    println!("Total of {} nodes found (showing {}).", total, shown);

    Ok(())
}

/// Nodes in display order, with dead ones dropped unless `include_dead`.
fn filter_nodes(status: &SiteStatus, include_dead: bool) -> Vec<(&String, &NodeStatus)> {
    status
        .nodes
        .iter()
        .filter(|(_, node)| include_dead || !node.is_dead())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn node(hard: &str) -> NodeStatus {
        NodeStatus {
            hard: hard.to_string(),
            soft: "free".to_string(),
            busy_slots: 0,
            free_slots: 32,
            reservations: Vec::new(),
            comment: None,
            extra: std::collections::HashMap::new(),
        }
    }

    fn status(entries: Vec<(&str, NodeStatus)>) -> SiteStatus {
        let nodes: BTreeMap<String, NodeStatus> = entries
            .into_iter()
            .map(|(name, node)| (name.to_string(), node))
            .collect();
        SiteStatus { nodes }
    }

    #[test]
    fn test_dead_nodes_hidden_by_default() {
        let status = status(vec![
            ("dahu-1.site", node("alive")),
            ("dahu-2.site", node("dead")),
        ]);
        let visible = filter_nodes(&status, false);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, "dahu-1.site");
    }

    #[test]
    fn test_dead_flag_includes_dead_nodes() {
        let status = status(vec![
            ("dahu-1.site", node("alive")),
            ("dahu-2.site", node("dead")),
        ]);
        let visible = filter_nodes(&status, true);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_nodes_sorted_by_name() {
        let status = status(vec![
            ("dahu-2.site", node("alive")),
            ("dahu-1.site", node("alive")),
        ]);
        let visible = filter_nodes(&status, false);
        let names: Vec<&str> = visible.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["dahu-1.site", "dahu-2.site"]);
    }
}
