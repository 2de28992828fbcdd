//! Schema validation utilities.
//!
//! `$ref` targets are never followed during conversion, so the only
//! structure that can loop is `allOf` inheritance between documents, which
//! would produce an interface that extends itself.

use crate::error::SchemaError;
use crate::types::SchemaDocument;
use std::collections::{BTreeMap, BTreeSet};

/// Validates that `allOf` inheritance among `schemas` is acyclic.
///
/// # Arguments
/// * `schemas` - Documents taking part in one conversion
/// * `resolve` - Maps an identifier or `$ref` target to its declaration name
///
/// References to names outside `schemas` are leaves.
///
/// # Errors
/// Returns `SchemaError::CircularReference` naming the cycle.
pub fn validate_inheritance<F>(schemas: &[SchemaDocument], resolve: F) -> Result<(), SchemaError>
where
    F: Fn(&str) -> String,
{
    let mut graph: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut roots = Vec::new();

    for schema in schemas {
        let Some(id) = schema.identifier() else {
            continue;
        };
        let name = resolve(id);
        let parents = graph.entry(name.clone()).or_default();
        parents.extend(schema.all_of_references().map(&resolve));
        roots.push(name);
    }

    let mut done = BTreeSet::new();
    for root in &roots {
        let mut stack = Vec::new();
        visit(&graph, root, &mut stack, &mut done)?;
    }

    Ok(())
}

/// Depth-first walk; `stack` holds the current inheritance chain.
fn visit<'g>(
    graph: &'g BTreeMap<String, Vec<String>>,
    name: &'g str,
    stack: &mut Vec<&'g str>,
    done: &mut BTreeSet<&'g str>,
) -> Result<(), SchemaError> {
    if done.contains(name) {
        return Ok(());
    }
    if let Some(pos) = stack.iter().position(|n| *n == name) {
        let mut cycle: Vec<&str> = stack[pos..].to_vec();
        cycle.push(name);
        return Err(SchemaError::CircularReference {
            path: cycle.join(" -> "),
        });
    }

    stack.push(name);
    if let Some(parents) = graph.get(name) {
        for parent in parents {
            visit(graph, parent, stack, done)?;
        }
    }
    stack.pop();
    done.insert(name);

    Ok(())
}
