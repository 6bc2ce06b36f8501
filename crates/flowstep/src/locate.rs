//! Root flow location.
//!
//! Picks the flow(s) of an artifact that a breakpoint lies in. The resolver is
//! only ever run over the flows returned here, in the order returned.

use log::debug;

use flowstep_core::{
    artifact::{Artifact, Sequences},
    flow::Flow,
    position::Position,
};

/// Find the root flows that `position` lies in.
///
/// - **API**: the first resource containing the position; of its in, out and
///   fault sequences (tested in that order) the first containing it.
/// - **Proxy**: the in and out sequences together if either contains the
///   position, so that stepping off the end of the in sequence lands on the
///   head of the out sequence; otherwise the fault sequence.
/// - **Sequence / Template**: the body.
///
/// Returns an empty list if no flow contains the position.
pub fn locate_flows(artifact: &Artifact, position: Position) -> Vec<&Flow> {
    let flows: Vec<&Flow> = match artifact {
        Artifact::Api(api) => api
            .resources()
            .iter()
            .find(|resource| resource.node().contains(position))
            .and_then(|resource| first_containing(resource.sequences(), position))
            .into_iter()
            .collect(),
        Artifact::Proxy(proxy) => proxy
            .target()
            .map(|target| proxy_flows(target.sequences(), position))
            .unwrap_or_default(),
        Artifact::Sequence(sequence) => Some(sequence.body())
            .filter(|body| body.contains(position))
            .into_iter()
            .collect(),
        Artifact::Template(template) => template
            .body()
            .filter(|body| body.contains(position))
            .into_iter()
            .collect(),
    };

    debug!(
        kind = artifact.kind_name(),
        name = artifact.name(),
        position:% = position,
        flows:? = flows.iter().map(|flow| flow.node().tag().to_string()).collect::<Vec<_>>();
        "Located root flows"
    );

    flows
}

fn present(sequence: &Option<Flow>, position: Position) -> Option<&Flow> {
    sequence.as_ref().filter(|flow| flow.contains(position))
}

fn first_containing(sequences: &Sequences, position: Position) -> Option<&Flow> {
    present(&sequences.in_sequence, position)
        .or_else(|| present(&sequences.out_sequence, position))
        .or_else(|| present(&sequences.fault_sequence, position))
}

fn proxy_flows(sequences: &Sequences, position: Position) -> Vec<&Flow> {
    let in_or_out = present(&sequences.in_sequence, position).is_some()
        || present(&sequences.out_sequence, position).is_some();

    if in_or_out {
        [&sequences.in_sequence, &sequences.out_sequence]
            .into_iter()
            .flatten()
            .collect()
    } else {
        present(&sequences.fault_sequence, position)
            .into_iter()
            .collect()
    }
}
