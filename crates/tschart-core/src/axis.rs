// File: crates/tschart-core/src/axis.rs
// Summary: Axis generator; turns a scale into an SVG group with domain line, ticks and labels.

use crate::scale::Scale;
use crate::svg::SvgElement;
use crate::ticks::format_coord;
use crate::types::TICK_COUNT;

/// Half-pixel shift so 1px strokes land on pixel centres.
const CRISP_OFFSET: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Horizontal axis; ticks point down, labels sit below.
    Bottom,
    /// Vertical axis; ticks point left, labels sit to the left.
    Left,
}

impl AxisOrient {
    fn sign(self) -> f64 {
        match self {
            AxisOrient::Bottom => 1.0,
            AxisOrient::Left => -1.0,
        }
    }
}

/// Axis drawn from a scale. The caller positions the returned group (e.g. with a
/// `translate` transform); coordinates inside are relative to the axis line.
pub struct Axis<'a, S: Scale> {
    scale: &'a S,
    orient: AxisOrient,
    tick_count: usize,
    tick_size_inner: f64,
    tick_size_outer: f64,
    tick_padding: f64,
}

impl<'a, S: Scale> Axis<'a, S> {
    pub fn new(scale: &'a S, orient: AxisOrient) -> Self {
        Self {
            scale,
            orient,
            tick_count: TICK_COUNT,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
        }
    }

    pub fn bottom(scale: &'a S) -> Self { Self::new(scale, AxisOrient::Bottom) }
    pub fn left(scale: &'a S) -> Self { Self::new(scale, AxisOrient::Left) }

    pub fn render(&self) -> SvgElement {
        let k = self.orient.sign();
        let (r0, r1) = self.scale.range();
        let outer = format_coord(k * self.tick_size_outer);
        let (a, b) = (format_coord(r0 + CRISP_OFFSET), format_coord(r1 + CRISP_OFFSET));

        let (anchor, domain_d) = match self.orient {
            AxisOrient::Bottom => ("middle", format!("M{a},{outer}V{CRISP_OFFSET}H{b}V{outer}")),
            AxisOrient::Left => ("end", format!("M{outer},{a}H{CRISP_OFFSET}V{b}H{outer}")),
        };

        let mut group = SvgElement::new("g")
            .attr("fill", "none")
            .attr("font-size", 10)
            .attr("font-family", "sans-serif")
            .attr("text-anchor", anchor)
            .child(
                SvgElement::new("path")
                    .attr("class", "domain")
                    .attr("stroke", "currentColor")
                    .attr("d", domain_d),
            );

        for value in self.scale.ticks(self.tick_count) {
            let pos = format_coord(self.scale.map(value) + CRISP_OFFSET);
            group.push(self.tick(&pos, self.scale.tick_label(value, self.tick_count)));
        }
        group
    }

    fn tick(&self, pos: &str, label: String) -> SvgElement {
        let k = self.orient.sign();
        let inner = format_coord(k * self.tick_size_inner);
        let spacing = format_coord(k * (self.tick_size_inner.max(0.0) + self.tick_padding));
        let (transform, line, text) = match self.orient {
            AxisOrient::Bottom => (
                format!("translate({pos},0)"),
                SvgElement::new("line").attr("stroke", "currentColor").attr("y2", inner),
                SvgElement::new("text").attr("fill", "currentColor").attr("y", spacing).attr("dy", "0.71em"),
            ),
            AxisOrient::Left => (
                format!("translate(0,{pos})"),
                SvgElement::new("line").attr("stroke", "currentColor").attr("x2", inner),
                SvgElement::new("text").attr("fill", "currentColor").attr("x", spacing).attr("dy", "0.32em"),
            ),
        };
        SvgElement::new("g")
            .attr("class", "tick")
            .attr("opacity", 1)
            .attr("transform", transform)
            .child(line)
            .child(text.text(label))
    }
}
