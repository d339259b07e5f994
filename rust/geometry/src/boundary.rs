// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bounded lines and closed rectangular boundary loops

use crate::error::{Error, Result};
use nalgebra::Point3;

/// Endpoints closer than this are considered coincident.
pub const POINT_TOLERANCE: f64 = 1e-9;

/// A bounded straight segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

impl Line {
    /// Creates a bounded line, rejecting zero-length segments.
    pub fn bound(start: Point3<f64>, end: Point3<f64>) -> Result<Self> {
        if (end - start).norm() <= POINT_TOLERANCE {
            return Err(Error::invalid_loop(format!(
                "zero-length line at {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Creates a line without validation. Used for room boundary segments
    /// handed over by a host.
    pub fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    /// Returns endpoint 0 or 1.
    pub fn end_point(&self, index: usize) -> Point3<f64> {
        if index == 0 {
            self.start
        } else {
            self.end
        }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// A closed loop of four lines forming a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryLoop {
    lines: [Line; 4],
}

impl BoundaryLoop {
    /// Builds a loop from four corners.
    ///
    /// Winding is fixed: (c4→c1), (c1→c2), (c2→c3), (c3→c4).
    pub fn from_corners(corners: [Point3<f64>; 4]) -> Result<Self> {
        let [c1, c2, c3, c4] = corners;
        let lines = [
            Line::bound(c4, c1)?,
            Line::bound(c1, c2)?,
            Line::bound(c2, c3)?,
            Line::bound(c3, c4)?,
        ];
        Self::from_lines(lines)
    }

    /// Builds a loop from four lines, checking that each ends where the next
    /// one starts.
    pub fn from_lines(lines: [Line; 4]) -> Result<Self> {
        for i in 0..lines.len() {
            let next = (i + 1) % lines.len();
            if (lines[i].end - lines[next].start).norm() > POINT_TOLERANCE {
                return Err(Error::invalid_loop(format!(
                    "line {i} does not connect to line {next}"
                )));
            }
        }
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[Line; 4] {
        &self.lines
    }

    /// Corners in construction order (c1, c2, c3, c4).
    pub fn corners(&self) -> [Point3<f64>; 4] {
        [
            self.lines[1].start,
            self.lines[2].start,
            self.lines[3].start,
            self.lines[0].start,
        ]
    }

    /// Component-wise minimum of the corners.
    pub fn min(&self) -> Point3<f64> {
        let c = self.corners();
        c[1..].iter().fold(c[0], |acc, p| acc.inf(p))
    }

    /// Component-wise maximum of the corners.
    pub fn max(&self) -> Point3<f64> {
        let c = self.corners();
        c[1..].iter().fold(c[0], |acc, p| acc.sup(p))
    }

    pub fn perimeter(&self) -> f64 {
        self.lines.iter().map(Line::length).sum()
    }
}
