//! Data display components

use serde::{Deserialize, Serialize};
use vanguard_theme::{primary_directive, TokenBundle};

use crate::classes::merge_classes;
use crate::error::{Result, UiError};

// =============================================================================
// Avatar
// =============================================================================

/// Round avatar showing an image or fallback initials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    /// Image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Text shown when there is no image
    pub fallback: String,
}

impl Avatar {
    /// Avatar with initials derived from a display name
    pub fn from_name(name: &str) -> Self {
        let fallback = name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        Self { src: None, fallback }
    }

    /// Set the image URL
    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> AvatarStyles {
        AvatarStyles {
            root: merge_classes(&[
                "relative flex h-10 w-10 shrink-0 overflow-hidden rounded-full",
                &theme.card_style,
            ]),
            image: self
                .src
                .as_ref()
                .map(|_| "aspect-square h-full w-full object-cover".to_string()),
            fallback: self.src.is_none().then(|| {
                merge_classes(&[
                    "flex h-full w-full items-center justify-center rounded-full text-xs font-bold",
                    &theme.background,
                ])
            }),
        }
    }
}

/// Computed avatar styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarStyles {
    /// Circle
    pub root: String,
    /// Image, when a source is set
    pub image: Option<String>,
    /// Initials, when no source is set
    pub fallback: Option<String>,
}

// =============================================================================
// Progress
// =============================================================================

/// Horizontal completion bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Progress {
    value: f64,
}

impl Progress {
    /// Create a bar, clamping `value` into 0..=100
    pub fn new(value: f64) -> Self {
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) };
        Self { value }
    }

    /// Completion percentage
    pub fn value(&self) -> f64 {
        self.value
    }

    /// How far the indicator is shifted left, in percent
    pub fn translate_offset(&self) -> f64 {
        100.0 - self.value
    }

    /// Compute styles. The indicator takes the accent's leading directive.
    pub fn computed_styles(&self, theme: &TokenBundle) -> ProgressStyles {
        ProgressStyles {
            root: "relative h-2 w-full overflow-hidden rounded-full bg-black/5 dark:bg-white/5".to_string(),
            indicator: merge_classes(&[
                "h-full w-full flex-1 transition-all",
                primary_directive(&theme.accent_style),
            ]),
            transform: format!("translateX(-{}%)", self.translate_offset()),
        }
    }
}

/// Computed progress styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStyles {
    /// Track
    pub root: String,
    /// Fill
    pub indicator: String,
    /// Inline transform of the fill
    pub transform: String,
}

// =============================================================================
// Skeleton
// =============================================================================

/// Pulsing loading placeholder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skeleton {
    /// Size and shape classes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Skeleton {
    /// Placeholder with the given size classes
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
        }
    }

    /// Classes for the placeholder
    pub fn computed_styles(&self) -> String {
        merge_classes(&[
            "animate-pulse rounded-md bg-black/5 dark:bg-white/5",
            self.class_name.as_deref().unwrap_or_default(),
        ])
    }
}

// =============================================================================
// Table
// =============================================================================

/// Simple table with a header row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column headings
    pub headers: Vec<String>,
    /// Body rows, each as wide as `headers`
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given headings
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Its width must match the header count.
    pub fn add_row<I, S>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        if row.len() != self.headers.len() {
            return Err(UiError::InvalidValue {
                field: "row",
                reason: format!("expected {} cells, got {}", self.headers.len(), row.len()),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> TableStyles {
        TableStyles {
            wrapper: "relative w-full overflow-auto".to_string(),
            table: merge_classes(&["w-full caption-bottom text-sm", &theme.text_style]),
            row: "border-b transition-colors hover:bg-black/5 dark:hover:bg-white/5 border-current/10"
                .to_string(),
            head: "h-12 px-4 text-left align-middle font-black opacity-50".to_string(),
            cell: "p-4 align-middle".to_string(),
        }
    }
}

/// Computed table styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStyles {
    /// Scroll wrapper
    pub wrapper: String,
    /// Table element
    pub table: String,
    /// Every row, header included
    pub row: String,
    /// Header cell
    pub head: String,
    /// Body cell
    pub cell: String,
}

// =============================================================================
// Calendar
// =============================================================================

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday column headings, Sunday first
pub const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Day of week, 0 = Sunday (Sakamoto's method)
fn weekday(year: i32, month: u32, day: u32) -> u32 {
    const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if month < 3 { year - 1 } else { year };
    let index = (month - 1) as usize;
    let w = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + OFFSETS[index] + day as i32;
    w.rem_euclid(7) as u32
}

/// One cell in the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "day", rename_all = "lowercase")]
pub enum CalendarCell {
    /// Padding before the first of the month
    Blank,
    /// A day of the month
    Day(u32),
}

/// Month grid with one selectable day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Calendar {
    year: i32,
    month: u32,
    selected: Option<u32>,
}

impl Default for Calendar {
    /// January 2026 with the 15th selected
    fn default() -> Self {
        Self {
            year: 2026,
            month: 1,
            selected: Some(15),
        }
    }
}

impl Calendar {
    /// Grid for `month` (1 to 12) of `year`, nothing selected
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(UiError::InvalidValue {
                field: "month",
                reason: format!("must be between 1 and 12, got {month}"),
            });
        }
        Ok(Self {
            year,
            month,
            selected: None,
        })
    }

    /// Heading such as "January 2026"
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    /// Number of days in the month
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Blank cells before the first day, Sunday first
    pub fn leading_blanks(&self) -> u32 {
        weekday(self.year, self.month, 1)
    }

    /// Selected day
    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Select a day of the month
    pub fn select(&mut self, day: u32) -> Result<()> {
        if day == 0 || day > self.days_in_month() {
            return Err(UiError::InvalidValue {
                field: "day",
                reason: format!("{} has no day {day}", self.title()),
            });
        }
        self.selected = Some(day);
        Ok(())
    }

    /// Blanks followed by every day, in reading order
    pub fn cells(&self) -> Vec<CalendarCell> {
        let blanks = (0..self.leading_blanks()).map(|_| CalendarCell::Blank);
        let days = (1..=self.days_in_month()).map(CalendarCell::Day);
        blanks.chain(days).collect()
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> CalendarStyles {
        let day = "h-8 w-8 text-xs font-bold rounded-md flex items-center justify-center transition-all hover:bg-black/5 dark:hover:bg-white/5";

        CalendarStyles {
            root: merge_classes(&["p-4 rounded-xl border w-fit", &theme.card_style]),
            title: merge_classes(&["text-sm font-black", &theme.text_style]),
            weekday: "h-8 w-8 text-[10px] font-black uppercase opacity-40 flex items-center justify-center"
                .to_string(),
            day: merge_classes(&[day, &theme.text_style]),
            selected_day: merge_classes(&[day, &theme.primary_button_style]),
        }
    }
}

/// Computed calendar styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarStyles {
    /// Panel
    pub root: String,
    /// Month heading
    pub title: String,
    /// Weekday heading cell
    pub weekday: String,
    /// Ordinary day
    pub day: String,
    /// Selected day
    pub selected_day: String,
}

// =============================================================================
// Bar Chart
// =============================================================================

/// Sample series shown in the chart demo
pub const SAMPLE_SERIES: [u32; 12] = [40, 70, 45, 90, 65, 80, 50, 85, 30, 95, 20, 75];

/// A rendered bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Height as a percentage of the plot
    pub height_percent: f64,
    /// Fill opacity, rising left to right
    pub opacity: f64,
}

/// Minimal vertical bar chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarChart {
    /// Raw values
    pub values: Vec<u32>,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            values: SAMPLE_SERIES.to_vec(),
        }
    }
}

impl BarChart {
    /// Chart over `values`
    pub fn new(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// Bars scaled to the plot. Values up to 100 are read as percentages;
    /// larger series are scaled so the tallest bar fills the plot.
    pub fn bars(&self) -> Vec<Bar> {
        let scale = self.values.iter().copied().max().unwrap_or(0).max(100) as f64;
        let count = self.values.len() as f64;
        self.values
            .iter()
            .enumerate()
            .map(|(i, &value)| Bar {
                height_percent: value as f64 / scale * 100.0,
                opacity: (i + 1) as f64 / count,
            })
            .collect()
    }

    /// Compute styles based on theme
    pub fn computed_styles(&self, theme: &TokenBundle) -> BarChartStyles {
        BarChartStyles {
            root: "h-48 w-full flex items-end gap-2".to_string(),
            bar: merge_classes(&["flex-1 transition-all duration-1000", &theme.primary_button_style]),
        }
    }
}

/// Computed chart styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarChartStyles {
    /// Plot area
    pub root: String,
    /// Each bar
    pub bar: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanguard_theme::builtin::base_bundle;
    use vanguard_theme::ThemeId;

    // ==========================================================================
    // Avatar / Progress Tests
    // ==========================================================================

    #[test]
    fn test_avatar_initials() {
        assert_eq!(Avatar::from_name("Ada Lovelace").fallback, "AL");
        assert_eq!(Avatar::from_name("grace brewster hopper").fallback, "GB");
        assert_eq!(Avatar::from_name("  ").fallback, "");
    }

    #[test]
    fn test_avatar_fallback_slot() {
        let theme = base_bundle(ThemeId::Minimalism);

        let initials = Avatar::from_name("Ada Lovelace").computed_styles(&theme);
        assert!(initials.image.is_none());
        assert!(initials.fallback.unwrap().contains("bg-[#FAF9F6]"));

        let image = Avatar::from_name("Ada Lovelace")
            .with_src("https://example.com/ada.png")
            .computed_styles(&theme);
        assert!(image.image.is_some());
        assert!(image.fallback.is_none());
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(Progress::new(120.0).value(), 100.0);
        assert_eq!(Progress::new(-5.0).value(), 0.0);
        assert_eq!(Progress::new(60.0).translate_offset(), 40.0);
    }

    #[test]
    fn test_progress_indicator() {
        let theme = base_bundle(ThemeId::Minimalism);
        let styles = Progress::new(60.0).computed_styles(&theme);
        assert!(styles.indicator.contains("bg-black"));
        assert_eq!(styles.transform, "translateX(-40%)");
    }

    #[test]
    fn test_skeleton() {
        assert_eq!(
            Skeleton::new("h-4 w-32").computed_styles(),
            "animate-pulse rounded-md bg-black/5 dark:bg-white/5 h-4 w-32"
        );
    }

    // ==========================================================================
    // Table Tests
    // ==========================================================================

    #[test]
    fn test_table_rows() {
        let mut table = Table::new(["Invoice", "Status", "Amount"]);
        table.add_row(["INV001", "Paid", "$250.00"]).unwrap();
        assert_eq!(table.rows.len(), 1);

        let err = table.add_row(["INV002", "Pending"]).unwrap_err();
        assert!(matches!(err, UiError::InvalidValue { field: "row", .. }));
        assert_eq!(table.rows.len(), 1);
    }

    // ==========================================================================
    // Calendar Tests
    // ==========================================================================

    #[test]
    fn test_calendar_default_month() {
        let calendar = Calendar::default();
        assert_eq!(calendar.title(), "January 2026");
        assert_eq!(calendar.leading_blanks(), 4);
        assert_eq!(calendar.days_in_month(), 31);
        assert_eq!(calendar.selected(), Some(15));
        assert_eq!(calendar.cells().len(), 35);
        assert_eq!(calendar.cells()[4], CalendarCell::Day(1));
    }

    #[test]
    fn test_calendar_leap_february() {
        let leap = Calendar::new(2024, 2).unwrap();
        assert_eq!(leap.days_in_month(), 29);
        assert_eq!(leap.leading_blanks(), 4);

        let common = Calendar::new(2100, 2).unwrap();
        assert_eq!(common.days_in_month(), 28);
    }

    #[test]
    fn test_calendar_rejects_bad_input() {
        assert!(Calendar::new(2026, 13).is_err());
        assert!(Calendar::new(2026, 0).is_err());

        let mut april = Calendar::new(2026, 4).unwrap();
        assert!(april.select(31).is_err());
        assert!(april.select(0).is_err());
        april.select(30).unwrap();
        assert_eq!(april.selected(), Some(30));
    }

    #[test]
    fn test_calendar_selected_day_style() {
        let theme = base_bundle(ThemeId::Minimalism);
        let styles = Calendar::default().computed_styles(&theme);
        assert!(styles.selected_day.contains("bg-black"));
        assert!(!styles.day.contains("bg-black "));
    }

    // ==========================================================================
    // Chart Tests
    // ==========================================================================

    #[test]
    fn test_chart_percent_series() {
        let bars = BarChart::default().bars();
        assert_eq!(bars.len(), 12);
        assert_eq!(bars[3].height_percent, 90.0);
        assert_eq!(bars[11].opacity, 1.0);
        assert!((bars[0].opacity - 1.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_chart_scales_large_values() {
        let bars = BarChart::new(vec![100, 400, 200]).bars();
        assert_eq!(bars[1].height_percent, 100.0);
        assert_eq!(bars[0].height_percent, 25.0);
    }

    #[test]
    fn test_chart_empty() {
        assert!(BarChart::new(Vec::new()).bars().is_empty());
    }
}
