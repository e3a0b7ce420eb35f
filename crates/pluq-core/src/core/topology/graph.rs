use super::tables::{self, Adjacency};
use crate::core::models::residue::{AminoAcid, ResidueError};
use std::collections::{HashMap, VecDeque};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("invalid residue: {0}")]
    InvalidResidue(#[from] ResidueError),

    #[error("'{atom}' is not an atom of {residue:?}")]
    InvalidAtom { residue: AminoAcid, atom: String },

    #[error("bond graph of {residue:?} does not connect '{start}' to '{end}'")]
    Disconnected {
        residue: AminoAcid,
        start: String,
        end: String,
    },
}

/// Covalent-bond graph of a single residue, backed by static tables.
#[derive(Debug, Clone, Copy)]
pub struct ResidueGraph {
    residue: AminoAcid,
    atoms: &'static [&'static str],
    bonds: &'static Adjacency,
}

impl ResidueGraph {
    pub fn of(residue: AminoAcid) -> Self {
        Self {
            residue,
            atoms: tables::catalog(residue),
            bonds: tables::adjacency(residue),
        }
    }

    pub fn residue(&self) -> AminoAcid {
        self.residue
    }

    /// The residue's atom catalog: heavy atoms first, then hydrogens.
    pub fn atoms(&self) -> &'static [&'static str] {
        self.atoms
    }

    pub fn contains(&self, atom: &str) -> bool {
        self.bonds.contains_key(atom)
    }

    /// Atoms directly bonded to `atom`, or `None` if the atom is not in this residue.
    pub fn neighbors(&self, atom: &str) -> Option<&'static [&'static str]> {
        self.bonds.get(atom).copied()
    }

    pub fn is_bonded(&self, a: &str, b: &str) -> bool {
        self.neighbors(a).is_some_and(|n| n.contains(&b))
    }

    fn resolve(&self, atom: &str) -> Result<&'static str, TopologyError> {
        self.bonds
            .get_key(atom)
            .copied()
            .ok_or_else(|| TopologyError::InvalidAtom {
                residue: self.residue,
                atom: atom.to_string(),
            })
    }

    /// Lazily walks every simple path from `start` to `end`.
    pub fn paths(&self, start: &str, end: &str) -> Result<Paths, TopologyError> {
        let start = self.resolve(start)?;
        let end = self.resolve(end)?;
        Ok(Paths::new(*self, start, end))
    }

    /// Number of bonds on the shortest path between two atoms.
    pub fn bond_distance(&self, start: &str, end: &str) -> Result<usize, TopologyError> {
        let start = self.resolve(start)?;
        let end = self.resolve(end)?;
        if start == end {
            return Ok(0);
        }

        let mut depth: HashMap<&'static str, usize> = HashMap::with_capacity(self.atoms.len());
        let mut queue = VecDeque::new();
        depth.insert(start, 0);
        queue.push_back(start);

        while let Some(atom) = queue.pop_front() {
            let next_depth = depth[atom] + 1;
            for &neighbor in self.neighbors(atom).unwrap_or_default() {
                if depth.contains_key(neighbor) {
                    continue;
                }
                if neighbor == end {
                    return Ok(next_depth);
                }
                depth.insert(neighbor, next_depth);
                queue.push_back(neighbor);
            }
        }

        Err(self.disconnected(start, end))
    }

    /// One shortest path between two atoms. Equal-length paths are ranked by their atom
    /// names, so the result is stable.
    pub fn shortest_path(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<&'static str>, TopologyError> {
        self.paths(start, end)?
            .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
            .ok_or_else(|| self.disconnected(start, end))
    }

    /// Atoms reachable from `start`, including itself.
    pub fn reachable_from(&self, start: &str) -> Result<Vec<&'static str>, TopologyError> {
        let start = self.resolve(start)?;
        let mut seen = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(atom) = queue.pop_front() {
            for &neighbor in self.neighbors(atom).unwrap_or_default() {
                if !seen.contains(&neighbor) {
                    seen.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }
        Ok(seen)
    }

    fn disconnected(&self, start: &str, end: &str) -> TopologyError {
        TopologyError::Disconnected {
            residue: self.residue,
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// Depth-first iterator over the simple paths between two atoms of a residue.
///
/// Paths are yielded in discovery order, which is not sorted by length.
#[derive(Debug, Clone)]
pub struct Paths {
    graph: ResidueGraph,
    end: &'static str,
    // Current path with, for each atom, the index of the next neighbor to try.
    stack: Vec<(&'static str, usize)>,
    trivial: bool,
}

impl Paths {
    fn new(graph: ResidueGraph, start: &'static str, end: &'static str) -> Self {
        Self {
            graph,
            end,
            stack: vec![(start, 0)],
            trivial: start == end,
        }
    }
}

impl Iterator for Paths {
    type Item = Vec<&'static str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.trivial {
            self.trivial = false;
            let path = self.stack.drain(..).map(|(atom, _)| atom).collect();
            return Some(path);
        }

        loop {
            let candidate = {
                let (atom, cursor) = self.stack.last_mut()?;
                let neighbors = self.graph.neighbors(*atom).unwrap_or_default();
                let candidate = neighbors.get(*cursor).copied();
                *cursor += 1;
                candidate
            };

            let Some(next) = candidate else {
                self.stack.pop();
                continue;
            };

            if self.stack.iter().any(|(atom, _)| *atom == next) {
                continue;
            }

            if next == self.end {
                let mut path: Vec<_> = self.stack.iter().map(|(atom, _)| *atom).collect();
                path.push(next);
                return Some(path);
            }

            self.stack.push((next, 0));
        }
    }
}

/// Every simple path between two atoms, with the residue given as a code.
pub fn enumerate_paths(residue: &str, start: &str, end: &str) -> Result<Paths, TopologyError> {
    let residue = residue.parse::<AminoAcid>()?;
    ResidueGraph::of(residue).paths(start, end)
}

/// Bonds between two atoms, with the residue given as a code.
pub fn bond_distance(residue: &str, start: &str, end: &str) -> Result<usize, TopologyError> {
    let residue = residue.parse::<AminoAcid>()?;
    ResidueGraph::of(residue).bond_distance(start, end)
}
