//! Fragment geometry: the polygons that tile the reference shape.
//!
//! DESIGN
//! ======
//! Generation is recursive convex cutting. We start from the reference shape
//! as a single convex polygon, then repeatedly take the largest piece and
//! cut it with a random line through a random interior point. Cutting a
//! convex polygon by a line yields two convex polygons whose union is the
//! original, so after `n - 1` cuts we hold exactly `n` convex, non-overlapping
//! fragments covering the shape.
//!
//! All coordinates live in normalized `[0, 1] x [0, 1]` space. Pixel scaling
//! happens per frame in [`crate::transform`].

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

use std::f64::consts::{PI, TAU};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{DISC_SEGMENTS, MAX_CUT_ATTEMPTS, MAX_FRAGMENT_COUNT, MIN_FRAGMENT_AREA};
use crate::error::DiagramError;
use crate::vector::Vector2;

/// Two vertices closer than this are merged after a cut.
const VERTEX_MERGE_EPSILON: f64 = 1e-12;

/// The shape that the fragments tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceShape {
    /// The whole unit square.
    #[default]
    Square,
    /// A regular polygon inscribed in the unit square, approximating a disc.
    Disc,
}

impl ReferenceShape {
    /// Boundary of the shape as a convex polygon in normalized space.
    #[must_use]
    pub fn outline(self) -> Vec<Vector2> {
        match self {
            Self::Square => vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(1.0, 0.0),
                Vector2::new(1.0, 1.0),
                Vector2::new(0.0, 1.0),
            ],
            Self::Disc => {
                let center = Vector2::new(0.5, 0.5);
                (0..DISC_SEGMENTS)
                    .map(|i| {
                        #[allow(clippy::cast_precision_loss)]
                        let angle = TAU * i as f64 / DISC_SEGMENTS as f64;
                        center.pls(Vector2::new(angle.cos(), angle.sin()).scl(0.5)).clamp(0.0, 1.0)
                    })
                    .collect()
            }
        }
    }
}

/// One polygonal piece of the diagram.
///
/// Vertex order defines the outline; the path closes by wrapping from the
/// last vertex back to the first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment {
    vertexes: Vec<Vector2>,
}

impl Fragment {
    /// Build a fragment from an explicit outline.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if there are fewer than 3 vertices or any coordinate
    /// falls outside `[0, 1]`.
    pub fn new(vertexes: Vec<Vector2>) -> Result<Self, DiagramError> {
        if vertexes.len() < 3 {
            return Err(DiagramError::invalid(format!(
                "fragment needs at least 3 vertices, got {}",
                vertexes.len()
            )));
        }
        if let Some(v) = vertexes
            .iter()
            .find(|v| !(0.0..=1.0).contains(&v.x) || !(0.0..=1.0).contains(&v.y))
        {
            return Err(DiagramError::invalid(format!(
                "fragment vertex ({}, {}) is outside the unit square",
                v.x, v.y
            )));
        }
        Ok(Self { vertexes })
    }

    #[must_use]
    pub fn vertexes(&self) -> &[Vector2] {
        &self.vertexes
    }

    /// Mean of the outline's vertices.
    #[must_use]
    pub fn center(&self) -> Vector2 {
        shape_center(&self.vertexes)
    }

    /// Enclosed area (shoelace formula).
    #[must_use]
    pub fn area(&self) -> f64 {
        let n = self.vertexes.len();
        let twice: f64 = (0..n)
            .map(|i| self.vertexes[i].cross(self.vertexes[(i + 1) % n]))
            .sum();
        twice.abs() / 2.0
    }

    /// Whether every turn along the outline bends the same way.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        let n = self.vertexes.len();
        let mut winding: Option<bool> = None;
        for i in 0..n {
            let a = self.vertexes[i];
            let b = self.vertexes[(i + 1) % n];
            let c = self.vertexes[(i + 2) % n];
            let turn = b.sub(a).cross(c.sub(b));
            if turn.abs() <= 1e-12 {
                continue;
            }
            match winding {
                None => winding = Some(turn > 0.0),
                Some(left) if left != (turn > 0.0) => return false,
                Some(_) => {}
            }
        }
        true
    }
}

/// Arithmetic mean of `vertexes`.
///
/// A single vertex is its own center. An empty slice yields NaN components.
#[must_use]
pub fn shape_center(vertexes: &[Vector2]) -> Vector2 {
    let sum = vertexes.iter().fold(Vector2::ZERO, |acc, v| acc.pls(*v));
    #[allow(clippy::cast_precision_loss)]
    let count = vertexes.len() as f64;
    sum.scl(1.0 / count)
}

/// Tile the unit square with `n` random convex fragments.
///
/// # Errors
///
/// `InvalidArgument` when `n` is zero or above [`MAX_FRAGMENT_COUNT`], or a cut degenerates.
pub fn generate_fragments(n: usize) -> Result<Vec<Fragment>, DiagramError> {
    generate_fragments_with(n, ReferenceShape::Square, &mut rand::rng())
}

/// Tile `shape` with exactly `n` convex fragments drawn from `rng`.
///
/// # Errors
///
/// `InvalidArgument` when `n` is zero or above [`MAX_FRAGMENT_COUNT`], or when a piece cannot be cut into
/// two non-degenerate halves within [`MAX_CUT_ATTEMPTS`] tries.
pub fn generate_fragments_with<R: Rng + ?Sized>(
    n: usize,
    shape: ReferenceShape,
    rng: &mut R,
) -> Result<Vec<Fragment>, DiagramError> {
    if n == 0 {
        return Err(DiagramError::invalid("fragment count must be at least 1"));
    }
    if n > MAX_FRAGMENT_COUNT {
        return Err(DiagramError::invalid(format!("fragment count {n} exceeds {MAX_FRAGMENT_COUNT}")));
    }

    let mut pieces = Vec::with_capacity(n);
    pieces.push(Fragment::new(shape.outline())?);

    while pieces.len() < n {
        let piece = pieces.swap_remove(largest(&pieces));
        let (front, back) = cut(&piece, rng)?;
        pieces.push(front);
        pieces.push(back);
    }

    Ok(pieces)
}

fn largest(pieces: &[Fragment]) -> usize {
    pieces
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.area().total_cmp(&b.area()))
        .map_or(0, |(i, _)| i)
}

/// Split a convex fragment in two along a random line through its interior.
fn cut<R: Rng + ?Sized>(piece: &Fragment, rng: &mut R) -> Result<(Fragment, Fragment), DiagramError> {
    let center = piece.center();
    let vertexes = piece.vertexes();

    for _ in 0..MAX_CUT_ATTEMPTS {
        // Pull the pivot from the center toward a random corner; stays interior.
        let corner = vertexes[rng.random_range(0..vertexes.len())];
        let pivot = center.pls(corner.sub(center).scl(rng.random_range(0.0..0.6)));
        let angle = rng.random_range(0.0..PI);
        let direction = Vector2::new(angle.cos(), angle.sin());

        let front = accept(clip(vertexes, pivot, direction, 1.0));
        let back = accept(clip(vertexes, pivot, direction, -1.0));
        if let (Some(front), Some(back)) = (front, back) {
            return Ok((front, back));
        }
    }

    Err(DiagramError::invalid(format!(
        "could not cut fragment of area {:e} into two non-degenerate pieces",
        piece.area()
    )))
}

/// Keep the part of a convex polygon on one side of the line through
/// `pivot` along `direction`. `side` is `1.0` for the left, `-1.0` for the right.
fn clip(vertexes: &[Vector2], pivot: Vector2, direction: Vector2, side: f64) -> Vec<Vector2> {
    let distance = |v: Vector2| direction.cross(v.sub(pivot)) * side;
    let n = vertexes.len();
    let mut out = Vec::with_capacity(n + 2);

    for (i, &current) in vertexes.iter().enumerate() {
        let next = vertexes[(i + 1) % n];
        let (dc, dn) = (distance(current), distance(next));
        if dc >= 0.0 {
            out.push(current);
        }
        if (dc > 0.0 && dn < 0.0) || (dc < 0.0 && dn > 0.0) {
            let t = dc / (dc - dn);
            out.push(current.pls(next.sub(current).scl(t)).clamp(0.0, 1.0));
        }
    }

    out
}

fn accept(mut vertexes: Vec<Vector2>) -> Option<Fragment> {
    vertexes.dedup_by(|b, a| a.dist(*b) <= VERTEX_MERGE_EPSILON);
    while vertexes.len() > 1 && vertexes[0].dist(vertexes[vertexes.len() - 1]) <= VERTEX_MERGE_EPSILON {
        vertexes.pop();
    }
    if vertexes.len() < 3 {
        return None;
    }
    let fragment = Fragment { vertexes };
    (fragment.area() > MIN_FRAGMENT_AREA).then_some(fragment)
}
