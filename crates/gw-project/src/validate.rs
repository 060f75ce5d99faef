//! Project validation logic.

use std::collections::HashSet;

use crate::schema::{LATEST_VERSION, Project};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate node: {id}")]
    DuplicateNode { id: String },

    #[error("Empty node id in {context}")]
    EmptyId { context: String },

    #[error("Invalid weight on edge {from} -> {to}: {weight}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut declared = HashSet::new();
    for id in &project.nodes {
        if id.is_empty() {
            return Err(ValidationError::EmptyId {
                context: "nodes".to_string(),
            });
        }
        if !declared.insert(id.as_str()) {
            return Err(ValidationError::DuplicateNode { id: id.clone() });
        }
    }

    for (i, edge) in project.edges.iter().enumerate() {
        if edge.from.is_empty() || edge.to.is_empty() {
            return Err(ValidationError::EmptyId {
                context: format!("edges[{}]", i),
            });
        }
        if gw_core::ensure_finite(edge.weight, "edge weight").is_err() {
            return Err(ValidationError::InvalidWeight {
                from: edge.from.clone(),
                to: edge.to.clone(),
                weight: edge.weight,
            });
        }
    }

    if project.playback.interval_ms == 0 {
        return Err(ValidationError::InvalidValue {
            field: "playback.interval_ms".to_string(),
            value: "0".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    if let Some(start) = &project.playback.start {
        if !project.node_order().contains(&start.as_str()) {
            return Err(ValidationError::InvalidValue {
                field: "playback.start".to_string(),
                value: start.clone(),
                reason: "not a node of the graph".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EdgeDef, PlaybackDef};

    fn project(edges: Vec<EdgeDef>) -> Project {
        Project {
            version: 1,
            name: "test".into(),
            directed: false,
            nodes: Vec::new(),
            edges,
            playback: PlaybackDef::default(),
        }
    }

    fn edge(from: &str, to: &str, weight: f64) -> EdgeDef {
        EdgeDef {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    #[test]
    fn accepts_simple_project() {
        assert!(validate_project(&project(vec![edge("A", "B", 1.0)])).is_ok());
    }

    #[test]
    fn rejects_future_version() {
        let mut p = project(Vec::new());
        p.version = LATEST_VERSION + 1;
        assert_eq!(
            validate_project(&p),
            Err(ValidationError::UnsupportedVersion { version: 2 })
        );
    }

    #[test]
    fn rejects_duplicate_declared_node() {
        let mut p = project(Vec::new());
        p.nodes = vec!["A".into(), "B".into(), "A".into()];
        assert!(matches!(
            validate_project(&p),
            Err(ValidationError::DuplicateNode { .. })
        ));
    }

    #[test]
    fn rejects_empty_endpoint() {
        let p = project(vec![edge("A", "", 1.0)]);
        assert!(matches!(
            validate_project(&p),
            Err(ValidationError::EmptyId { .. })
        ));
    }

    #[test]
    fn rejects_nan_weight() {
        let p = project(vec![edge("A", "B", f64::NAN)]);
        assert!(matches!(
            validate_project(&p),
            Err(ValidationError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn rejects_zero_interval() {
        let mut p = project(vec![edge("A", "B", 1.0)]);
        p.playback.interval_ms = 0;
        assert!(validate_project(&p).is_err());
    }

    #[test]
    fn start_must_be_a_node() {
        let mut p = project(vec![edge("A", "B", 1.0)]);
        p.playback.start = Some("B".into());
        assert!(validate_project(&p).is_ok());
        p.playback.start = Some("Q".into());
        assert!(validate_project(&p).is_err());
    }
}
