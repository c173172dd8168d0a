//! Lattice patterns: regular, staggered, hexagonal and triangular grids.

use crate::{
    foundation::core::Container,
    layout::request::{BasicLayout, BasicPattern, LayoutPoint, LayoutResult},
};

const HEX_PACKING: f64 = 1.154_700_538_379_251_5; // 2 / sqrt(3)
const HEX_ROW_PITCH: f64 = 0.866;
const TRI_ROW_PITCH: f64 = 0.866_025_403_784_438_6; // sqrt(3) / 2

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LatticeParams {
    pub spacing: Option<f64>,
    pub offset_factor: f64,
}

/// `span / units`, or the whole span when there is nothing to divide by.
fn fit(span: f64, units: f64) -> f64 {
    if units > 0.0 { span / units } else { span }
}

fn fit_spacing(rows: u32, cols: u32, container: &Container) -> f64 {
    let sx = fit(container.available_width(), f64::from(cols.saturating_sub(1)));
    let sy = fit(container.available_height(), f64::from(rows.saturating_sub(1)));
    sx.min(sy)
}

fn positive(v: Option<f64>) -> Option<f64> {
    v.filter(|s| s.is_finite() && *s > 0.0)
}

fn aspect(container: &Container) -> f64 {
    let h = container.available_height();
    let w = container.available_width();
    if h > 0.0 && w > 0.0 { w / h } else { 1.0 }
}

fn rows_for(count: u32, cols: u32) -> u32 {
    count.div_ceil(cols.max(1))
}

pub(crate) fn basic_grid(req: &BasicLayout) -> LayoutResult {
    let BasicLayout {
        rows,
        cols,
        spacing_override,
        pattern,
        container,
    } = req;
    let (rows, cols) = (*rows, *cols);
    if rows == 0 || cols == 0 {
        return LayoutResult::empty();
    }

    let spacing = positive(*spacing_override).unwrap_or_else(|| fit_spacing(rows, cols, container));
    let staggered = *pattern == BasicPattern::Staggered;

    let mut points = Vec::with_capacity((rows as usize) * (cols as usize));
    for r in 0..rows {
        let shift = if staggered && r % 2 == 1 {
            spacing * 0.5
        } else {
            0.0
        };
        for c in 0..cols {
            points.push(LayoutPoint::grid(
                f64::from(c) * spacing + shift,
                f64::from(r) * spacing,
                r,
                c,
            ));
        }
    }

    LayoutResult {
        points,
        rows: Some(rows),
        cols: Some(cols),
        spacing: Some(spacing),
        ..LayoutResult::default()
    }
}

/// Regular or staggered grid sized from a point budget.
pub(crate) fn counted_grid(
    count: u32,
    staggered: bool,
    params: LatticeParams,
    container: &Container,
) -> LayoutResult {
    let cols = ((f64::from(count) * aspect(container)).sqrt().ceil() as u32).clamp(1, count);
    let rows = rows_for(count, cols);
    let spacing = positive(params.spacing).unwrap_or_else(|| fit_spacing(rows, cols, container));

    let mut points = Vec::with_capacity(count as usize);
    'outer: for r in 0..rows {
        let shift = if staggered && r % 2 == 1 {
            spacing * 0.5
        } else {
            0.0
        };
        for c in 0..cols {
            if points.len() as u32 >= count {
                break 'outer;
            }
            points.push(LayoutPoint::grid(
                f64::from(c) * spacing + shift,
                f64::from(r) * spacing,
                r,
                c,
            ));
        }
    }

    LayoutResult {
        points,
        rows: Some(rows),
        cols: Some(cols),
        spacing: Some(spacing),
        ..LayoutResult::default()
    }
}

pub(crate) fn hexagonal(count: u32, params: LatticeParams, container: &Container) -> LayoutResult {
    let cols = ((f64::from(count) * aspect(container) * HEX_PACKING)
        .sqrt()
        .round() as u32)
        .clamp(1, count);
    let rows = rows_for(count, cols);
    let offset = params.offset_factor;

    let spacing = positive(params.spacing).unwrap_or_else(|| {
        let extra = if rows > 1 { offset.abs() } else { 0.0 };
        let sx = fit(
            container.available_width(),
            f64::from(cols.saturating_sub(1)) + extra,
        );
        let sy = fit(
            container.available_height(),
            f64::from(rows.saturating_sub(1)) * HEX_ROW_PITCH,
        );
        sx.min(sy)
    });

    let mut points = Vec::with_capacity(count as usize);
    'outer: for r in 0..rows {
        let shift = if r % 2 == 1 { offset * spacing } else { 0.0 };
        for c in 0..cols {
            if points.len() as u32 >= count {
                break 'outer;
            }
            points.push(LayoutPoint::grid(
                f64::from(c) * spacing + shift,
                f64::from(r) * spacing * HEX_ROW_PITCH,
                r,
                c,
            ));
        }
    }

    LayoutResult {
        points,
        rows: Some(rows),
        cols: Some(cols),
        spacing: Some(spacing),
        ..LayoutResult::default()
    }
}

pub(crate) fn triangular(count: u32, params: LatticeParams, container: &Container) -> LayoutResult {
    let cols = ((f64::from(count) * 1.2).sqrt().ceil() as u32).max(1);
    let rows = rows_for(count, cols);

    let spacing = positive(params.spacing).unwrap_or_else(|| {
        let extra = if rows > 1 { 0.5 } else { 0.0 };
        let sx = fit(
            container.available_width(),
            f64::from(cols.saturating_sub(1)) + extra,
        );
        let sy = fit(
            container.available_height(),
            f64::from(rows.saturating_sub(1)) * TRI_ROW_PITCH,
        );
        sx.min(sy)
    });
    let row_height = spacing * TRI_ROW_PITCH;

    let mut points = Vec::with_capacity(count as usize);
    'outer: for r in 0..rows {
        let shift = if r % 2 == 1 { spacing * 0.5 } else { 0.0 };
        for c in 0..cols {
            if points.len() as u32 >= count {
                break 'outer;
            }
            points.push(LayoutPoint::grid(
                f64::from(c) * spacing + shift,
                f64::from(r) * row_height,
                r,
                c,
            ));
        }
    }

    LayoutResult {
        points,
        rows: Some(rows),
        cols: Some(cols),
        spacing: Some(spacing),
        ..LayoutResult::default()
    }
}
