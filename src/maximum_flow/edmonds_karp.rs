use crate::error::{Error, Result};
use crate::graph::{validate_vertex, FlowNetwork};
use crate::maximum_flow::MaxFlow;
use crate::sequence::Queue;
use num_traits::{CheckedAdd, NumAssign};
use tracing::{debug, trace};

/// Ford-Fulkerson that always augments along a fewest-edge path, found by BFS over
/// edges with positive residual capacity. O(E^2 V).
///
/// Flow is written into the network's edges, which must all start at zero flow;
/// otherwise `solve` fails with [`Error::FlowNotCleared`]. Call
/// [`FlowNetwork::clear_flow`] before solving the same network again.
#[derive(Default)]
pub struct EdmondsKarp {
    edge_to: Vec<usize>,
    marked: Vec<bool>,
    queue: Queue<usize>,
}

impl EdmondsKarp {
    pub fn solve<Flow>(&mut self, network: &mut FlowNetwork<Flow>, source: usize, sink: usize) -> Result<MaxFlow<Flow>>
    where
        Flow: NumAssign + CheckedAdd + Ord + Copy,
    {
        let n = network.num_vertices();
        validate_vertex(source, n)?;
        validate_vertex(sink, n)?;
        if source == sink {
            return Err(Error::SourceIsSink(source));
        }
        if let Some(e) = network.edges().find(|e| e.flow() != Flow::zero()) {
            return Err(Error::FlowNotCleared { from: e.from(), to: e.to() });
        }
        self.edge_to.resize(n, usize::MAX);
        self.marked.resize(n, false);

        let mut value = Flow::zero();
        let mut num_paths = 0usize;
        while self.has_augmenting_path(network, source, sink)? {
            // calculate bottleneck
            let mut delta = network.edge_at(self.edge_to[sink]).residual_capacity_to(sink)?;
            let mut v = sink;
            while v != source {
                let edge = network.edge_at(self.edge_to[v]);
                delta = delta.min(edge.residual_capacity_to(v)?);
                v = edge.other(v)?;
            }

            // update flow
            let mut v = sink;
            while v != source {
                let edge = network.edge_mut(self.edge_to[v]);
                edge.add_residual_flow_to(v, delta)?;
                v = edge.other(v)?;
            }

            value = value.checked_add(&delta).ok_or(Error::WeightOverflow { from: source, to: sink })?;
            num_paths += 1;
            trace!(path = num_paths, "augmented along shortest path");
        }

        // the last search failed, so `marked` is exactly the source side of a minimum cut
        let cut_edges = network.edges().filter(|e| self.marked[e.from()] && !self.marked[e.to()]).copied().collect();

        debug!(source, sink, augmenting_paths = num_paths, "edmonds-karp done");
        Ok(MaxFlow { value, source_side: self.marked.clone(), cut_edges })
    }

    fn has_augmenting_path<Flow>(&mut self, network: &FlowNetwork<Flow>, source: usize, sink: usize) -> Result<bool>
    where
        Flow: NumAssign + Ord + Copy,
    {
        self.edge_to.fill(usize::MAX);
        self.marked.fill(false);
        self.queue.clear();

        self.marked[source] = true;
        self.queue.enqueue(source);
        while let Some(v) = self.queue.dequeue() {
            for &edge_id in network.incident(v) {
                let edge = network.edge_at(edge_id);
                let w = edge.other(v)?;
                if self.marked[w] || edge.residual_capacity_to(w)? == Flow::zero() {
                    continue;
                }

                self.edge_to[w] = edge_id;
                self.marked[w] = true;
                if w == sink {
                    return Ok(true);
                }
                self.queue.enqueue(w);
            }
        }

        Ok(false)
    }
}
