//! Two-team side-by-side comparison

use crate::ranking::{layout_metrics, Entry, Ranking, Score};
use crate::rendering::paint::{PaintCommand, Scene};
use crate::rendering::{checked_dimension, Canvas};
use crate::style::StyleConfig;
use crate::{Error, Result, Scoreboard};

const DIVIDER_WIDTH: u32 = 4;
const OUTLINE_STROKE: u32 = 4;
const OUTLINE_RADIUS: u32 = 8;

/// Exactly two entries drawn in input order: first on the left, second on
/// the right, separated by a vertical divider. Scores do not affect placement.
#[derive(Debug, Clone)]
pub struct Head2Head {
    teams: Ranking,
    style: StyleConfig,
    rendered: Option<Canvas>,
}

impl Head2Head {
    pub fn new<I, N, S>(pairs: I, style: StyleConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<Score>,
    {
        style.validate()?;
        let teams = Ranking::positional(pairs)?;
        if teams.len() != 2 {
            return Err(Error::validation(format!(
                "a head-to-head needs exactly 2 entries, got {}",
                teams.len()
            )));
        }
        Ok(Self {
            teams,
            style,
            rendered: None,
        })
    }

    pub fn left(&self) -> &Entry {
        &self.teams.entries()[0]
    }

    pub fn right(&self) -> &Entry {
        &self.teams.entries()[1]
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Compute canvas geometry and the draw list
    ///
    /// Fails with [`Error::RenderError`] when the content needs a canvas edge
    /// past [`MAX_DIMENSION`](crate::rendering::MAX_DIMENSION).
    pub fn layout(&self) -> Result<Scene> {
        let style = &self.style;
        let margin = style.margin;
        let name_font = style.font.bold();
        let score_font = style.font.score();
        let title_font = style.font.title();
        let metrics = layout_metrics(&self.teams, name_font, score_font);

        // space between a score and the outside of its outline
        let pad = if style.rectangle {
            style.rectangle_margin + OUTLINE_STROKE
        } else {
            0
        };

        let margins = u64::from(margin.horizontal());
        let natural_half = u64::from(metrics.name_width)
            .max(u64::from(metrics.score_width) + 2 * u64::from(pad))
            + margins;
        let natural_title = style
            .title
            .as_deref()
            .map_or(0, |t| u64::from(title_font.text_width(t)) + margins);
        let width = match style.width {
            Some(width) => width,
            None => checked_dimension("width", (2 * natural_half).max(natural_title))?,
        };
        let half = width / 2;
        let inner = half.saturating_sub(margin.horizontal());

        let mut commands = Vec::new();
        let mut top = margin.top;

        if let Some(title) = style.title.as_deref() {
            let available = width.saturating_sub(margin.horizontal());
            let font = title_font.fit_to_width(title, available);
            let x = margin.left + available.saturating_sub(font.text_width(title)) / 2;
            commands.push(PaintCommand::text(
                x as i32,
                top as i32,
                title,
                font,
                style.text_color,
            ));
            top += font.line_height() + style.line_spacing;
        }

        let score_top = top + name_font.line_height() + style.line_spacing + pad;
        let height = checked_dimension(
            "height",
            u64::from(score_top)
                + u64::from(score_font.line_height())
                + u64::from(pad)
                + u64::from(margin.bottom),
        )?;

        for (i, entry) in self.teams.entries().iter().enumerate() {
            let center = (i as u32 * half + half / 2) as i32;

            let font = name_font.fit_to_width(&entry.name, inner);
            commands.push(PaintCommand::text(
                center - (font.text_width(&entry.name) / 2) as i32,
                top as i32,
                entry.name.as_str(),
                font,
                style.text_color,
            ));

            let score = entry.score.to_string();
            let font = score_font.fit_to_width(&score, inner.saturating_sub(2 * pad));
            let score_width = font.text_width(&score);
            let y = score_top + (score_font.line_height() - font.line_height()) / 2;
            let x = center - (score_width / 2) as i32;
            commands.push(PaintCommand::text(x, y as i32, score.as_str(), font, style.score_color));

            if style.rectangle {
                let m = style.rectangle_margin;
                commands.push(PaintCommand::RoundedRectOutline {
                    x: x - m as i32,
                    y: (y - m) as i32,
                    width: score_width + 2 * m,
                    height: font.line_height() + 2 * m,
                    radius: OUTLINE_RADIUS,
                    stroke: OUTLINE_STROKE,
                    color: style.rectangle_color,
                });
            }
        }

        commands.push(PaintCommand::vline(
            half as i32,
            top as i32,
            (height - margin.bottom) as i32,
            DIVIDER_WIDTH,
            style.rectangle_color,
        ));

        log::debug!(
            "head-to-head layout: {}x{} canvas, {}px per side",
            width,
            height,
            half
        );

        Ok(Scene {
            width,
            height,
            fill: style.fill_color,
            commands,
        })
    }
}

impl Scoreboard for Head2Head {
    fn render(&self) -> Result<Canvas> {
        self.layout()?.rasterize()
    }

    fn cache(&mut self) -> &mut Option<Canvas> {
        &mut self.rendered
    }
}
