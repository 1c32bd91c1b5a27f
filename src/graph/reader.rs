use crate::error::{Error, Result};
use std::io::Read;
use std::str::FromStr;

pub(crate) struct EdgeList<W> {
    pub num_vertices: usize,
    pub edges: Vec<(usize, usize, W)>,
}

// V, E, then E triples of (from, to, weight)
pub(crate) fn read_edge_list<W: FromStr, R: Read>(mut reader: R) -> Result<EdgeList<W>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    let mut tokens = input.split_whitespace();

    let num_vertices = next_non_negative(&mut tokens, "vertex count")?;
    let num_edges = next_non_negative(&mut tokens, "edge count")?;

    let mut edges = Vec::with_capacity(num_edges.min(input.len() / 6));
    for _ in 0..num_edges {
        let from = next_non_negative(&mut tokens, "edge source")?;
        let to = next_non_negative(&mut tokens, "edge target")?;
        let weight = next_value(&mut tokens, "edge weight")?;
        edges.push((from, to, weight));
    }

    Ok(EdgeList { num_vertices, edges })
}

fn next_token<'a>(tokens: &mut impl Iterator<Item = &'a str>, expected: &'static str) -> Result<&'a str> {
    tokens.next().ok_or(Error::UnexpectedEndOfInput { expected })
}

fn next_value<'a, T: FromStr>(tokens: &mut impl Iterator<Item = &'a str>, expected: &'static str) -> Result<T> {
    let token = next_token(tokens, expected)?;
    token.parse().map_err(|_| Error::InvalidInteger { token: token.to_owned() })
}

fn next_non_negative<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &'static str) -> Result<usize> {
    let value: i64 = next_value(tokens, what)?;
    usize::try_from(value).map_err(|_| Error::NegativeValue { what, value })
}
