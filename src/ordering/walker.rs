use super::OrderingReport;
use crate::graph::{GraphIndex, NodeKind};
use ahash::AHashSet;

/// Slack added to the node count when bounding a single section walk.
const STEP_SLACK: usize = 10;

/// Walks section chains, sharing one visited set across all sections of a derivation.
pub(super) struct SectionWalker<'g, 'a> {
    index: &'g GraphIndex<'a>,
    visited: AHashSet<&'a str>,
    step_limit: usize,
}

impl<'g, 'a> SectionWalker<'g, 'a> {
    pub(super) fn new(index: &'g GraphIndex<'a>, node_count: usize) -> Self {
        Self {
            index,
            visited: AHashSet::new(),
            step_limit: node_count + STEP_SLACK,
        }
    }

    /// Emits the section marker at `root_id`, then follows its chain until `end`,
    /// another section, a visited field or a dead end.
    pub(super) fn walk(&mut self, root_id: &'a str, report: &mut OrderingReport) {
        let Some(root) = self.index.node(root_id) else {
            return;
        };
        let Some(section) = root.as_field() else {
            return;
        };
        report.ordered_fields.push(section.clone());
        report.sequence.push(root.id.clone());

        // The root only hands over to a field; `end` is reached through content.
        let mut current = self.first_content_neighbor(self.index.outgoing(root_id));
        let mut steps = 0;
        while let Some(id) = current {
            if steps >= self.step_limit {
                tracing::warn!(section = root_id, steps, "section walk hit its step limit");
                break;
            }
            steps += 1;

            if self.visited.contains(id) {
                break;
            }
            let Some(node) = self.index.node(id) else {
                break;
            };

            match &node.kind {
                NodeKind::End => {
                    report.sequence.push(node.id.clone());
                    break;
                }
                NodeKind::Field(field) if field.is_section() => {
                    report.warnings.push(format!(
                        "Section \"{}\" points to another Static. Consider wiring that Static from Start directly.",
                        section.display_name()
                    ));
                    break;
                }
                NodeKind::Field(field) => {
                    report.ordered_fields.push(field.clone());
                    report.sequence.push(node.id.clone());
                    self.visited.insert(id);
                    current = self.next_step(id);
                }
                NodeKind::Start | NodeKind::Submit(_) => break,
            }
        }
    }

    /// Picks where the chain continues from `from`: the first non-section field by
    /// layout, else the first section, else an `end` neighbor.
    fn next_step(&self, from: &str) -> Option<&'a str> {
        let nexts = self.index.outgoing(from);
        self.first_content_neighbor(nexts).or_else(|| {
            nexts
                .iter()
                .copied()
                .find(|id| self.index.node(id).is_some_and(|n| n.is_end()))
        })
    }

    fn first_content_neighbor(&self, nexts: &[&'a str]) -> Option<&'a str> {
        let is_field = |id: &&'a str| self.index.node(id).is_some_and(|n| n.is_field());
        let is_section = |id: &&'a str| self.index.node(id).is_some_and(|n| n.is_section());

        let earliest = |candidates: Vec<&'a str>| {
            candidates
                .into_iter()
                .min_by(|a, b| self.index.layout_cmp(a, b))
        };

        let fields: Vec<&'a str> = nexts.iter().copied().filter(is_field).collect();
        let content: Vec<&'a str> = fields
            .iter()
            .copied()
            .filter(|id| !is_section(id))
            .collect();

        earliest(content).or_else(|| earliest(fields))
    }
}
