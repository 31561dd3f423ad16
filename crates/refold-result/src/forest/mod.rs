//! Folding of flat result lists into attachment and sibling forests.
//!
//! A top result arrives with a flat `child_results` list in which every record
//! may name a parent through `parent_result`. Folding turns that list into:
//!
//! - `top.attachments`: records whose parent is the top result
//! - `top.child_results`: root siblings, i.e. records without a parent inside the group
//! - `record.attachments`: records whose parent is `record`, at any depth
//!
//! # Ordering
//!
//! Members of every list are ordered by the earliest flat-list position of the
//! member or of any record folded beneath it. A parent that only shows up late
//! in the list is still placed where its first attachment appeared.
//!
//! # Degenerate input
//!
//! - Repeated `unique_id`s (including the top's own) keep the first occurrence.
//!   Its parent is replaced by a later occurrence's when only the later one
//!   names a parent inside the group.
//! - A parent that is not in the group, or a record naming itself, makes the
//!   record a root sibling.
//! - In a `parent_result` cycle the member seen first becomes a root sibling.

use std::{collections::HashMap, mem};

use tracing::{debug, warn};

use crate::ResultRecord;


/// Folds `top.child_results` into `top.attachments` and `top.child_results`.
///
/// Any attachments already on `top` are replaced. Records nested inside the
/// flat list are detached and folded along with it, so a folded forest fed
/// back in yields the same forest.
pub fn build_forest(mut top: ResultRecord) -> ResultRecord {
    let flat = flatten_records(mem::take(&mut top.child_results));
    let mut forest = Forest::build(Some(&top.unique_id), flat);
    top.attachments = forest.take_top_attachments();
    top.child_results = forest.take_roots();
    top
}

/// Folds a flat list that has no anchoring top result and returns its roots.
pub fn fold_flat(records: Vec<ResultRecord>) -> Vec<ResultRecord> {
    Forest::build(None, flatten_records(records)).take_roots()
}

/// Detaches the folded records below `top` and returns them as a flat list.
///
/// Records come out in pre-order, attachments before siblings, so that
/// folding the list again reproduces the detached forest.
pub fn flatten_forest(top: &mut ResultRecord) -> Vec<ResultRecord> {
    let mut flat = Vec::with_capacity(top.folded_len());
    for attachment in mem::take(&mut top.attachments) {
        push_preorder(adopt(attachment, &top.unique_id), &mut flat);
    }
    for sibling in mem::take(&mut top.child_results) {
        push_preorder(sibling, &mut flat);
    }
    flat
}

/// Flattens every record of `records` together with anything nested inside it.
fn flatten_records(records: Vec<ResultRecord>) -> Vec<ResultRecord> {
    let mut flat = Vec::with_capacity(records.len());
    for record in records {
        push_preorder(record, &mut flat);
    }
    flat
}

/// Pushes `record` and then its nested records onto `flat`.
fn push_preorder(mut record: ResultRecord, flat: &mut Vec<ResultRecord>) {
    let attachments = mem::take(&mut record.attachments);
    let siblings = mem::take(&mut record.child_results);
    let parent_id = record.unique_id.clone();
    flat.push(record);

    for attachment in attachments {
        push_preorder(adopt(attachment, &parent_id), flat);
    }
    for sibling in siblings {
        push_preorder(sibling, flat);
    }
}

/// Points a detached attachment at the record it was nested under, if it has no parent.
fn adopt(mut attachment: ResultRecord, parent_id: &str) -> ResultRecord {
    if attachment.parent_result.is_none() {
        attachment.parent_result = Some(parent_id.to_string());
    }
    attachment
}

/// Where a record hangs once its parent has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    /// Attachment of the top result.
    Top,
    /// Root sibling.
    Root,
    /// Attachment of the record in the given slot.
    Node(usize),
}

/// An arena of deduplicated records with their resolved structure.
struct Forest {
    /// Records by slot; a slot is emptied once its record has been assembled.
    slots: Vec<Option<ResultRecord>>,
    /// Ordered attachment slots per slot.
    children: Vec<Vec<usize>>,
    /// Ordered slots attached to the top result.
    top_attachments: Vec<usize>,
    /// Ordered root sibling slots.
    roots: Vec<usize>,
}

impl Forest {
    /// Indexes, resolves and orders `flat` relative to the optional anchor id.
    fn build(anchor_id: Option<&str>, flat: Vec<ResultRecord>) -> Self {
        let mut index: HashMap<String, usize> = HashMap::with_capacity(flat.len());
        let mut records = Vec::with_capacity(flat.len());
        let mut positions = Vec::with_capacity(flat.len());
        // Parents named by dropped duplicates, per kept slot.
        let mut duplicate_parents: Vec<Vec<String>> = Vec::with_capacity(flat.len());

        for (position, record) in flat.into_iter().enumerate() {
            if anchor_id == Some(record.unique_id.as_str()) {
                debug!(unique_id = %record.unique_id, position, "dropping duplicate of top result");
                continue;
            }
            if let Some(&slot) = index.get(&record.unique_id) {
                debug!(unique_id = %record.unique_id, position, "dropping duplicate result");
                if let Some(parent_id) = record.parent_result {
                    duplicate_parents[slot].push(parent_id);
                }
                continue;
            }
            index.insert(record.unique_id.clone(), records.len());
            positions.push(position);
            records.push(record);
            duplicate_parents.push(Vec::new());
        }
        adopt_duplicate_parents(&mut records, duplicate_parents, anchor_id, &index);

        let mut anchors: Vec<Anchor> = records
            .iter()
            .map(|record| resolve_anchor(record, anchor_id, &index))
            .collect();
        break_cycles(&mut anchors, &records);

        let earliest = earliest_positions(&anchors, &positions);
        let by_earliest = |slot: &usize| earliest[*slot];

        let mut children = vec![Vec::new(); records.len()];
        let mut top_attachments = Vec::new();
        let mut roots = Vec::new();
        for (slot, anchor) in anchors.iter().enumerate() {
            match anchor {
                Anchor::Top => top_attachments.push(slot),
                Anchor::Root => roots.push(slot),
                Anchor::Node(parent) => children[*parent].push(slot),
            }
        }

        top_attachments.sort_by_key(by_earliest);
        roots.sort_by_key(by_earliest);
        for list in &mut children {
            list.sort_by_key(by_earliest);
        }

        Self {
            slots: records.into_iter().map(Some).collect(),
            children,
            top_attachments,
            roots,
        }
    }

    /// Assembles the records attached to the top result.
    fn take_top_attachments(&mut self) -> Vec<ResultRecord> {
        let slots = mem::take(&mut self.top_attachments);
        slots.into_iter().filter_map(|s| self.assemble(s)).collect()
    }

    /// Assembles the root siblings.
    fn take_roots(&mut self) -> Vec<ResultRecord> {
        let slots = mem::take(&mut self.roots);
        slots.into_iter().filter_map(|s| self.assemble(s)).collect()
    }

    /// Moves the record in `slot` out of the arena with its attachments attached.
    fn assemble(&mut self, slot: usize) -> Option<ResultRecord> {
        let mut record = self.slots[slot].take()?;
        let children = mem::take(&mut self.children[slot]);
        record.attachments = children
            .into_iter()
            .filter_map(|c| self.assemble(c))
            .collect();
        Some(record)
    }
}

/// Gives a kept record the parent of a later duplicate when its own parent is not in the group.
fn adopt_duplicate_parents(
    records: &mut [ResultRecord],
    duplicate_parents: Vec<Vec<String>>,
    anchor_id: Option<&str>,
    index: &HashMap<String, usize>,
) {
    for (record, candidates) in records.iter_mut().zip(duplicate_parents) {
        let in_group = |parent_id: &str| -> bool {
            parent_id != record.unique_id
                && (anchor_id == Some(parent_id) || index.contains_key(parent_id))
        };
        if record.parent_result.as_deref().is_some_and(in_group) {
            continue;
        }
        let Some(parent_id) = candidates.into_iter().find(|p| in_group(p)) else {
            continue;
        };
        debug!(
            unique_id = %record.unique_id,
            parent = %parent_id,
            "taking parent from duplicate result"
        );
        record.parent_result = Some(parent_id);
    }
}

/// Resolves a record's `parent_result` against the group.
fn resolve_anchor(
    record: &ResultRecord,
    anchor_id: Option<&str>,
    index: &HashMap<String, usize>,
) -> Anchor {
    let Some(parent_id) = record.parent_result.as_deref() else {
        return Anchor::Root;
    };
    if parent_id == record.unique_id {
        return Anchor::Root;
    }
    if anchor_id == Some(parent_id) {
        return Anchor::Top;
    }
    match index.get(parent_id) {
        Some(&slot) => Anchor::Node(slot),
        None => {
            debug!(
                unique_id = %record.unique_id,
                parent = parent_id,
                "parent not in result group, folding as sibling"
            );
            Anchor::Root
        }
    }
}

/// Demotes one member of every parent cycle to a root sibling.
fn break_cycles(anchors: &mut [Anchor], records: &[ResultRecord]) {
    for slot in 0..anchors.len() {
        let mut current = anchors[slot];
        let mut hops = 0;
        while let Anchor::Node(parent) = current {
            if parent == slot {
                warn!(
                    unique_id = %records[slot].unique_id,
                    "parent chain loops back onto itself, folding as sibling"
                );
                anchors[slot] = Anchor::Root;
                break;
            }
            hops += 1;
            // A loop that does not pass through `slot` is cut when its own first member is visited.
            if hops > anchors.len() {
                break;
            }
            current = anchors[parent];
        }
    }
}

/// Computes, per slot, the earliest position of the slot or any of its descendants.
fn earliest_positions(anchors: &[Anchor], positions: &[usize]) -> Vec<usize> {
    let mut earliest = positions.to_vec();
    for (slot, &position) in positions.iter().enumerate() {
        let mut current = anchors[slot];
        while let Anchor::Node(parent) = current {
            earliest[parent] = earliest[parent].min(position);
            current = anchors[parent];
        }
    }
    earliest
}
