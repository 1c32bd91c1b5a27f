use crate::error::{Error, Result};
use num_traits::NumAssign;

/// Weighted edge. For undirected graphs `from`/`to` are just the two endpoints.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W: Copy> Edge<W> {
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        Self { from, to, weight }
    }

    #[inline]
    pub fn other(&self, v: usize) -> Result<usize> {
        if v == self.from {
            Ok(self.to)
        } else if v == self.to {
            Ok(self.from)
        } else {
            Err(Error::NotAnEndpoint { vertex: v })
        }
    }

    /// Equality for undirected edges: same endpoint pair in either order, same weight.
    pub fn same_undirected(&self, other: &Self) -> bool
    where
        W: PartialEq,
    {
        let endpoints = (self.from.min(self.to), self.from.max(self.to));
        endpoints == (other.from.min(other.to), other.from.max(other.to)) && self.weight == other.weight
    }
}

/// Directed edge of a flow network, with `0 <= flow <= capacity` at all times.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct FlowEdge<W> {
    from: usize,
    to: usize,
    capacity: W,
    flow: W,
}

impl<W> FlowEdge<W>
where
    W: NumAssign + Ord + Copy,
{
    pub fn new(from: usize, to: usize, capacity: W) -> Result<Self> {
        if capacity < W::zero() {
            return Err(Error::NegativeCapacity { from, to });
        }
        Ok(Self { from, to, capacity, flow: W::zero() })
    }

    #[inline]
    pub fn from(&self) -> usize {
        self.from
    }

    #[inline]
    pub fn to(&self) -> usize {
        self.to
    }

    #[inline]
    pub fn capacity(&self) -> W {
        self.capacity
    }

    #[inline]
    pub fn flow(&self) -> W {
        self.flow
    }

    #[inline]
    pub fn other(&self, v: usize) -> Result<usize> {
        if v == self.from {
            Ok(self.to)
        } else if v == self.to {
            Ok(self.from)
        } else {
            Err(Error::NotAnEndpoint { vertex: v })
        }
    }

    /// Capacity still usable when pushing flow toward `v`:
    /// `capacity - flow` toward `to`, `flow` (cancellation) toward `from`.
    #[inline]
    pub fn residual_capacity_to(&self, v: usize) -> Result<W> {
        if v == self.to {
            Ok(self.capacity - self.flow)
        } else if v == self.from {
            Ok(self.flow)
        } else {
            Err(Error::NotAnEndpoint { vertex: v })
        }
    }

    #[inline]
    pub(crate) fn clear_flow(&mut self) {
        self.flow = W::zero();
    }

    pub fn add_residual_flow_to(&mut self, v: usize, delta: W) -> Result<()> {
        let flow = if v == self.to {
            self.flow + delta
        } else if v == self.from {
            self.flow - delta
        } else {
            return Err(Error::NotAnEndpoint { vertex: v });
        };

        if flow < W::zero() || flow > self.capacity {
            return Err(Error::FlowOutOfBounds { from: self.from, to: self.to });
        }
        self.flow = flow;
        Ok(())
    }
}
