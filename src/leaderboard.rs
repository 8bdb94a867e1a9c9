//! Multi-row leaderboard sorted by descending score

use crate::ranking::{layout_metrics, Ranking, Score};
use crate::rendering::paint::{PaintCommand, Scene};
use crate::rendering::{checked_dimension, Canvas};
use crate::style::StyleConfig;
use crate::{Result, Scoreboard};

/// A ranked list of players drawn as stacked rows: rank, name, score.
///
/// Entries are sorted by descending score at construction; equal scores keep
/// their input order. Nothing is drawn until the first export.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    ranking: Ranking,
    style: StyleConfig,
    rendered: Option<Canvas>,
}

impl Leaderboard {
    pub fn new<I, N, S>(pairs: I, style: StyleConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<Score>,
    {
        style.validate()?;
        let ranking = Ranking::normalize(pairs)?;
        Ok(Self {
            ranking,
            style,
            rendered: None,
        })
    }

    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Compute canvas geometry and the draw list
    ///
    /// Fails with [`Error::RenderError`](crate::Error::RenderError) when the
    /// content needs a canvas edge past [`MAX_DIMENSION`](crate::rendering::MAX_DIMENSION).
    pub fn layout(&self) -> Result<Scene> {
        let style = &self.style;
        let margin = style.margin;
        let rank_font = style.font.regular();
        let name_font = style.font.bold();
        let score_font = style.font.regular();
        let metrics = layout_metrics(&self.ranking, name_font, score_font);

        // one character cell between columns
        let gap = rank_font.advance();
        let rank_col = metrics.rank_width + gap;
        let score_col = gap + metrics.score_width;

        let title_font = style.font.title();
        let natural_title = style
            .title
            .as_deref()
            .map_or(0, |t| title_font.text_width(t));

        let width = match style.width {
            Some(width) => width,
            None => {
                let natural_row =
                    u64::from(rank_col) + u64::from(metrics.name_width) + u64::from(score_col);
                let natural = natural_row.max(natural_title.into()) + u64::from(margin.horizontal());
                checked_dimension("width", natural)?
            }
        };
        let content_width = width.saturating_sub(margin.horizontal());
        let name_max = content_width.saturating_sub(rank_col + score_col);
        let right = (width - margin.right.min(width)) as i32;

        // separators straddle the gap above the first row and below the last
        let half_spacing = style.line_spacing / 2;
        let (room_above, room_below) = if style.separator {
            let w = style.separator_width;
            (half_spacing + w / 2, half_spacing + (w - w / 2))
        } else {
            (0, 0)
        };

        let mut commands = Vec::new();
        let mut top = margin.top;

        if let Some(title) = style.title.as_deref() {
            let font = title_font.fit_to_width(title, content_width);
            let x = margin.left + content_width.saturating_sub(font.text_width(title)) / 2;
            commands.push(PaintCommand::text(
                x as i32,
                top as i32,
                title,
                font,
                style.text_color,
            ));
            top += font.line_height() + style.line_spacing;
        }
        let top = top.max(room_above);

        let row_height = style.row_height.unwrap_or(metrics.text_height);
        let n = self.ranking.len() as u64;
        let rows_height = n * u64::from(row_height) + (n - 1) * u64::from(style.line_spacing);
        let height = checked_dimension(
            "height",
            u64::from(top) + rows_height + u64::from(margin.bottom.max(room_below)),
        )?;
        // every offset below is bounded by `height`
        let rows_height = rows_height as u32;
        let pitch = row_height + style.line_spacing;

        for (i, (rank, entry)) in self.ranking.ranked().enumerate() {
            let row_top = top + i as u32 * pitch;
            let color = style.row_color(i);

            if style.separator {
                commands.push(PaintCommand::hline(
                    margin.left as i32,
                    right,
                    (row_top - half_spacing) as i32,
                    style.separator_width,
                    style.rectangle_color,
                ));
            }

            let centered = |line_height: u32| (row_top + row_height.saturating_sub(line_height) / 2) as i32;

            commands.push(PaintCommand::text(
                margin.left as i32,
                centered(rank_font.line_height()),
                rank.to_string(),
                rank_font,
                color,
            ));

            let font = name_font.fit_to_width(&entry.name, name_max);
            commands.push(PaintCommand::text(
                (margin.left + rank_col) as i32,
                centered(font.line_height()),
                entry.name.as_str(),
                font,
                color,
            ));

            let score = entry.score.to_string();
            commands.push(PaintCommand::text(
                right - score_font.text_width(&score) as i32,
                centered(score_font.line_height()),
                score,
                score_font,
                style.score_color,
            ));
        }

        if style.separator {
            commands.push(PaintCommand::hline(
                margin.left as i32,
                right,
                (top + rows_height + half_spacing) as i32,
                style.separator_width,
                style.rectangle_color,
            ));
        }

        log::debug!(
            "leaderboard layout: {} rows, {}x{} canvas, name column {}px",
            n,
            width,
            height,
            name_max
        );

        Ok(Scene {
            width,
            height,
            fill: style.fill_color,
            commands,
        })
    }
}

impl Scoreboard for Leaderboard {
    fn render(&self) -> Result<Canvas> {
        self.layout()?.rasterize()
    }

    fn cache(&mut self) -> &mut Option<Canvas> {
        &mut self.rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Margins;
    use crate::Error;

    fn texts(scene: &Scene) -> Vec<&str> {
        scene.texts().map(|(t, _, _)| t).collect()
    }

    #[test]
    fn rows_follow_sorted_order_with_ranks() {
        let lb = Leaderboard::new([("A", 30), ("B", 15), ("C", 50)], StyleConfig::default()).unwrap();
        let scene = lb.layout().unwrap();
        assert_eq!(
            texts(&scene),
            ["1", "C", "50", "2", "A", "30", "3", "B", "15"]
        );
    }

    #[test]
    fn rows_stack_top_to_bottom() {
        let lb = Leaderboard::new([("A", 3), ("B", 2), ("C", 1)], StyleConfig::default()).unwrap();
        let scene = lb.layout().unwrap();
        let ys: Vec<i32> = scene
            .texts()
            .filter(|(t, _, _)| ["A", "B", "C"].contains(t))
            .map(|(_, _, y)| y)
            .collect();
        assert!(ys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn title_is_drawn_first_and_adds_height() {
        let plain = Leaderboard::new([("A", 1)], StyleConfig::default()).unwrap();
        let titled = Leaderboard::new(
            [("A", 1)],
            StyleConfig {
                title: Some("Ranking".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let scene = titled.layout().unwrap();
        assert_eq!(texts(&scene)[0], "Ranking");
        assert!(scene.height > plain.layout().unwrap().height);
    }

    #[test]
    fn single_entry_geometry() {
        let style = StyleConfig {
            separator: false,
            ..Default::default()
        };
        let lb = Leaderboard::new([("Solo", 7)], style.clone()).unwrap();
        let scene = lb.layout().unwrap();
        // rank "1", gap, "Solo", gap, "7" at 32px cells plus margins
        assert_eq!(scene.width, 8 * 32 + 48);
        assert_eq!(scene.height, 32 + 48);
        assert!(scene.commands.iter().all(|c| matches!(c, PaintCommand::Text { .. })));
    }

    #[test]
    fn separators_surround_every_row() {
        let lb = Leaderboard::new([("A", 1), ("B", 2)], StyleConfig::default()).unwrap();
        let lines = lb
            .layout()
            .unwrap()
            .commands
            .iter()
            .filter(|c| matches!(c, PaintCommand::Line { .. }))
            .count();
        assert_eq!(lines, 3);
    }

    #[test]
    fn scores_are_right_aligned() {
        let lb = Leaderboard::new([("A", 1000), ("B", 5)], StyleConfig::default()).unwrap();
        let scene = lb.layout().unwrap();
        let right = (scene.width - lb.style().margin.right) as i32;
        for (text, x, _) in scene.texts().filter(|(t, _, _)| *t == "1000" || *t == "5") {
            assert_eq!(x + 32 * text.len() as i32, right);
        }
    }

    #[test]
    fn fixed_width_shrinks_long_names() {
        let style = StyleConfig {
            width: Some(400),
            ..Default::default()
        };
        let lb = Leaderboard::new([("A really long username", 30)], style).unwrap();
        let scene = lb.layout().unwrap();
        assert_eq!(scene.width, 400);
        let name_font = scene
            .commands
            .iter()
            .find_map(|c| match c {
                PaintCommand::Text { text, font, .. } if text == "A really long username" => Some(*font),
                _ => None,
            })
            .unwrap();
        assert!(name_font.scale() < 4);
    }

    #[test]
    fn invalid_style_is_rejected_at_construction() {
        let style = StyleConfig {
            row_height: Some(0),
            ..Default::default()
        };
        assert!(Leaderboard::new([("A", 1)], style).is_err());
    }

    #[test]
    fn separators_stay_on_canvas_without_margins() {
        let style = StyleConfig {
            margin: Margins::uniform(0),
            separator_width: 5,
            ..Default::default()
        };
        let lb = Leaderboard::new([("A", 2), ("B", 1)], style).unwrap();
        let scene = lb.layout().unwrap();
        for c in &scene.commands {
            if let PaintCommand::Line { from, width, .. } = c {
                let y0 = from.1 - (*width / 2) as i32;
                assert!(y0 >= 0, "separator starts above the canvas at {y0}");
                assert!(y0 + *width as i32 <= scene.height as i32);
            }
        }

        let canvas = lb.render().unwrap();
        let bottom = canvas.height() - 1;
        assert_eq!(canvas.pixel(0, bottom), Some(lb.style().rectangle_color));
        assert_eq!(canvas.pixel(0, 0), Some(lb.style().rectangle_color));
    }

    #[test]
    fn default_margins_leave_room_for_separators() {
        let lb = Leaderboard::new([("Solo", 7)], StyleConfig::default()).unwrap();
        let scene = lb.layout().unwrap();
        assert_eq!(scene.height, 32 + 48);
    }

    #[test]
    fn too_many_rows_is_a_render_error() {
        let pairs: Vec<(String, i64)> = (0..2000).map(|i| (format!("p{i}"), i)).collect();
        let lb = Leaderboard::new(pairs, StyleConfig::default()).unwrap();
        assert!(matches!(lb.layout(), Err(Error::RenderError(_))));
    }

    #[test]
    fn overlong_name_is_a_render_error() {
        let lb = Leaderboard::new([("x".repeat(10_000), 1)], StyleConfig::default()).unwrap();
        assert!(matches!(lb.layout(), Err(Error::RenderError(_))));

        // a fixed width shrinks the name instead
        let style = StyleConfig {
            width: Some(600),
            ..Default::default()
        };
        let lb = Leaderboard::new([("x".repeat(10_000), 1)], style).unwrap();
        assert_eq!(lb.layout().unwrap().width, 600);
    }
}
