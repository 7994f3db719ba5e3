//! Collect query fragments attached to component instances

use figtag_scene::{NodeKind, SceneNode};
use std::collections::HashSet;
use tracing::debug;

/// Plugin-data key holding a query fragment on an instance or component
pub const GQL_FRAGMENT_KEY: &str = "gqlFragment";

/// Distinct fragment strings from every instance below `root`, in document
/// order. An instance without its own fragment inherits its component's.
pub fn get_child_gql_fragments(root: SceneNode<'_>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut fragments = Vec::new();

    for node in root.descendants() {
        if node.kind() != NodeKind::Instance {
            continue;
        }

        let Some(fragment) = fragment_for_instance(&node) else {
            continue;
        };

        if seen.insert(fragment.clone()) {
            fragments.push(fragment);
        }
    }

    debug!(fragments = fragments.len(), "Collected child fragments");
    fragments
}

fn fragment_for_instance(node: &SceneNode<'_>) -> Option<String> {
    let own = non_blank(node.plugin_data(GQL_FRAGMENT_KEY));
    let inherited = || {
        node.main_component()
            .and_then(|component| non_blank(component.plugin_data(GQL_FRAGMENT_KEY)))
    };

    own.or_else(inherited).map(str::to_string)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
