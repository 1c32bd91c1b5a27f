use crate::error::Result;
use crate::graph::edge::FlowEdge;
use crate::graph::reader::read_edge_list;
use crate::graph::validate_vertex;
use num_traits::NumAssign;
use std::io::Read;
use std::str::FromStr;
use tracing::debug;

/// Flow network. Edges live in a single arena; both endpoints' adjacency lists hold
/// the edge id, so a flow update is seen from either side.
#[derive(Debug, Clone)]
pub struct FlowNetwork<W> {
    edges: Vec<FlowEdge<W>>,
    adj: Vec<Vec<usize>>,
}

impl<W> FlowNetwork<W>
where
    W: NumAssign + Ord + Copy,
{
    pub fn new(num_vertices: usize) -> Self {
        Self { edges: Vec::new(), adj: vec![Vec::new(); num_vertices] }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self>
    where
        W: FromStr,
    {
        let list = read_edge_list(reader)?;
        let mut network = Self::new(list.num_vertices);
        for (from, to, capacity) in list.edges {
            network.add_edge(from, to, capacity)?;
        }
        debug!(vertices = network.num_vertices(), edges = network.num_edges(), "flow network read from stream");
        Ok(network)
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    // return edge id
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: W) -> Result<usize> {
        validate_vertex(from, self.num_vertices())?;
        validate_vertex(to, self.num_vertices())?;

        let edge_id = self.edges.len();
        self.edges.push(FlowEdge::new(from, to, capacity)?);
        self.adj[from].push(edge_id);
        if from != to {
            self.adj[to].push(edge_id);
        }
        Ok(edge_id)
    }

    pub fn edge(&self, edge_id: usize) -> Option<&FlowEdge<W>> {
        self.edges.get(edge_id)
    }

    pub fn edges(&self) -> std::slice::Iter<'_, FlowEdge<W>> {
        self.edges.iter()
    }

    /// Resets every edge to zero flow, keeping capacities.
    pub fn clear_flow(&mut self) {
        self.edges.iter_mut().for_each(FlowEdge::clear_flow);
    }

    /// Edges touching `v` (leaving or entering), in insertion order.
    pub fn adjacent(&self, v: usize) -> Result<impl Iterator<Item = &FlowEdge<W>> + '_> {
        validate_vertex(v, self.num_vertices())?;
        Ok(self.adj[v].iter().map(|&edge_id| &self.edges[edge_id]))
    }

    /// Net flow leaving `v`.
    pub fn flow_out_of(&self, v: usize) -> Result<W> {
        validate_vertex(v, self.num_vertices())?;
        Ok(self.adj[v].iter().fold(W::zero(), |mut flow, &edge_id| {
            let edge = &self.edges[edge_id];
            if edge.from() == v {
                flow += edge.flow();
            }
            if edge.to() == v {
                flow -= edge.flow();
            }
            flow
        }))
    }

    /// Whether the current flow respects every capacity and is conserved at every
    /// vertex other than `source` and `sink`.
    pub fn is_feasible(&self, source: usize, sink: usize) -> Result<bool> {
        validate_vertex(source, self.num_vertices())?;
        validate_vertex(sink, self.num_vertices())?;

        if self.edges.iter().any(|e| e.flow() < W::zero() || e.flow() > e.capacity()) {
            return Ok(false);
        }
        for v in 0..self.num_vertices() {
            if v != source && v != sink && self.flow_out_of(v)? != W::zero() {
                return Ok(false);
            }
        }
        Ok(self.flow_out_of(source)? + self.flow_out_of(sink)? == W::zero())
    }

    #[inline]
    pub(crate) fn incident(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    #[inline]
    pub(crate) fn edge_at(&self, edge_id: usize) -> &FlowEdge<W> {
        &self.edges[edge_id]
    }

    #[inline]
    pub(crate) fn edge_mut(&mut self, edge_id: usize) -> &mut FlowEdge<W> {
        &mut self.edges[edge_id]
    }
}
