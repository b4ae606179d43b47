//! Course search, filtering, and sorting for the browse pages.
//!
//! Queries borrow from the catalogue and never reorder it in place. Every
//! sort is stable, so courses that tie keep their catalogue order.

use std::cmp::Ordering;
use std::str::FromStr;

use super::{Course, Difficulty, ParsePreferenceError};

/// Label of the category filter that matches everything.
pub const ALL_CATEGORIES: &str = "All";

/// Label of the difficulty filter that matches everything.
pub const ALL_LEVELS: &str = "All Levels";

/// Categories offered by the browse filter, starting with [`ALL_CATEGORIES`].
pub const CATEGORIES: [&str; 10] = [
    ALL_CATEGORIES,
    "Programming",
    "Data Science",
    "Design",
    "Business",
    "Mathematics",
    "Science",
    "Languages",
    "Arts",
    "Health",
];

/// Difficulty filter labels, starting with [`ALL_LEVELS`].
pub const LEVELS: [&str; 4] = [
    ALL_LEVELS,
    Difficulty::Beginner.label(),
    Difficulty::Intermediate.label(),
    Difficulty::Advanced.label(),
];

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Most enrolled students first.
    #[default]
    MostPopular,
    /// Latest catalogue additions first.
    Newest,
    /// Best rated first.
    HighestRated,
    /// Cheapest first.
    PriceLowToHigh,
    /// Most expensive first.
    PriceHighToLow,
    /// Free courses before paid ones.
    FreeFirst,
}

impl SortOrder {
    /// Every order in menu order.
    pub const ALL: [Self; 6] = [
        Self::MostPopular,
        Self::Newest,
        Self::HighestRated,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::FreeFirst,
    ];

    /// Identifier used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MostPopular => "popular",
            Self::Newest => "newest",
            Self::HighestRated => "rating",
            Self::PriceLowToHigh => "price-asc",
            Self::PriceHighToLow => "price-desc",
            Self::FreeFirst => "free-first",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MostPopular => "Most Popular",
            Self::Newest => "Newest",
            Self::HighestRated => "Highest Rated",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::FreeFirst => "Free First",
        }
    }

    fn compare(self, a: &Course, b: &Course) -> Ordering {
        match self {
            Self::MostPopular => b.students_count.cmp(&a.students_count),
            Self::HighestRated => b.rating.total_cmp(&a.rating),
            Self::PriceLowToHigh => a.price.cmp(&b.price),
            Self::PriceHighToLow => b.price.cmp(&a.price),
            Self::FreeFirst => b.is_free().cmp(&a.is_free()),
            Self::Newest => Ordering::Equal,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s || order.label() == s)
            .ok_or_else(|| ParsePreferenceError::new("sort order", s))
    }
}

/// Parse a difficulty filter label; [`ALL_LEVELS`] means no filter.
///
/// Accepts the labels in [`LEVELS`] and their lowercase forms.
///
/// # Errors
///
/// Returns [`ParsePreferenceError`] for anything else.
pub fn parse_level(input: &str) -> Result<Option<Difficulty>, ParsePreferenceError> {
    if input.eq_ignore_ascii_case(ALL_LEVELS) || input.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    Difficulty::ALL
        .into_iter()
        .find(|level| level.label().eq_ignore_ascii_case(input))
        .map(Some)
        .ok_or_else(|| ParsePreferenceError::new("level", input))
}

/// Search, filters, and ordering for a course listing.
///
/// # Examples
///
/// ```
/// use beam::domain::{CourseQuery, SeedBundle, SortOrder};
///
/// let seed = SeedBundle::builtin().expect("built-in seed");
/// let query = CourseQuery {
///     search: "python".to_owned(),
///     ..CourseQuery::default()
/// };
/// let hits = query.apply(&seed.courses);
/// assert_eq!(hits.len(), 2);
/// assert_eq!(CourseQuery::default().sort, SortOrder::MostPopular);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseQuery {
    /// Case-insensitive text matched against title, description, and
    /// instructor name. Empty matches everything; whitespace is matched
    /// literally.
    pub search: String,
    /// Exact category; `None` matches every category.
    pub category: Option<String>,
    /// Difficulty tier; `None` matches every tier.
    pub difficulty: Option<Difficulty>,
    /// Result ordering.
    pub sort: SortOrder,
}

impl CourseQuery {
    /// Set the category from a filter label, treating [`ALL_CATEGORIES`] as
    /// no filter.
    #[must_use]
    pub fn with_category(mut self, label: &str) -> Self {
        self.category = (label != ALL_CATEGORIES).then(|| label.to_owned());
        self
    }

    /// Whether `course` passes the search and filters.
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        self.matches_search(course)
            && self
                .category
                .as_ref()
                .is_none_or(|category| &course.category == category)
            && self.difficulty.is_none_or(|level| course.level == level)
    }

    fn matches_search(&self, course: &Course) -> bool {
        let needle = self.search.to_lowercase();
        needle.is_empty()
            || [&course.title, &course.description, &course.instructor_name]
                .into_iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Matching courses in the requested order.
    #[must_use]
    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        let mut hits: Vec<&Course> = courses.iter().filter(|c| self.matches(c)).collect();
        if self.sort == SortOrder::Newest {
            hits.reverse();
        } else {
            hits.sort_by(|a, b| self.sort.compare(a, b));
        }
        hits
    }
}

/// Featured courses in catalogue order.
pub fn featured<'a, I>(courses: I) -> impl Iterator<Item = &'a Course>
where
    I: IntoIterator<Item = &'a Course>,
{
    courses.into_iter().filter(|course| course.featured)
}

/// Course ids the learner has hearted, in the order they were liked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedCourses(Vec<String>);

impl LikedCourses {
    /// Like `course_id`, or unlike it if already liked. Returns whether it is
    /// now liked.
    pub fn toggle(&mut self, course_id: &str) -> bool {
        if let Some(index) = self.0.iter().position(|id| id == course_id) {
            self.0.remove(index);
            false
        } else {
            self.0.push(course_id.to_owned());
            true
        }
    }

    /// Whether `course_id` is liked.
    #[must_use]
    pub fn contains(&self, course_id: &str) -> bool {
        self.0.iter().any(|id| id == course_id)
    }

    /// Liked ids in like order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::SeedBundle;

    #[fixture]
    fn courses() -> Vec<Course> {
        SeedBundle::builtin().expect("seed").courses
    }

    fn ids(hits: &[&Course]) -> Vec<String> {
        hits.iter().map(|course| course.id.clone()).collect()
    }

    #[rstest]
    #[case("PYTHON", &["1", "3"])]
    #[case("michael", &["2"])]
    #[case("", &["1", "3", "5", "2", "4", "6"])]
    #[case(" ", &["1", "3", "5", "2", "4", "6"])]
    #[case("  ", &[])]
    #[case("quantum", &[])]
    fn search_is_a_case_insensitive_substring(
        courses: Vec<Course>,
        #[case] search: &str,
        #[case] expected: &[&str],
    ) {
        let query = CourseQuery {
            search: search.to_owned(),
            ..CourseQuery::default()
        };
        assert_eq!(ids(&query.apply(&courses)), expected);
    }

    #[rstest]
    fn filters_combine(courses: Vec<Course>) {
        let query = CourseQuery {
            difficulty: Some(Difficulty::Intermediate),
            ..CourseQuery::default()
        }
        .with_category("Design");
        assert_eq!(ids(&query.apply(&courses)), ["4"]);

        let everything = CourseQuery::default().with_category(ALL_CATEGORIES);
        assert_eq!(everything.category, None);
        assert_eq!(everything.apply(&courses).len(), courses.len());
    }

    #[rstest]
    #[case(SortOrder::MostPopular, &["1", "3", "5", "2", "4", "6"])]
    #[case(SortOrder::Newest, &["6", "5", "4", "3", "2", "1"])]
    #[case(SortOrder::HighestRated, &["1", "2", "6", "3", "4", "5"])]
    #[case(SortOrder::PriceLowToHigh, &["1", "5", "4", "2", "6", "3"])]
    #[case(SortOrder::PriceHighToLow, &["3", "6", "2", "4", "1", "5"])]
    #[case(SortOrder::FreeFirst, &["1", "5", "2", "3", "4", "6"])]
    fn sorts_are_stable(
        courses: Vec<Course>,
        #[case] sort: SortOrder,
        #[case] expected: &[&str],
    ) {
        let query = CourseQuery {
            sort,
            ..CourseQuery::default()
        };
        assert_eq!(ids(&query.apply(&courses)), expected);
    }

    #[rstest]
    fn sort_orders_parse_from_id_or_label() {
        for order in SortOrder::ALL {
            assert_eq!(order.as_str().parse::<SortOrder>(), Ok(order));
            assert_eq!(order.label().parse::<SortOrder>(), Ok(order));
        }
        assert!("cheapest".parse::<SortOrder>().is_err());
    }

    #[rstest]
    #[case("All Levels", Some(None))]
    #[case("advanced", Some(Some(Difficulty::Advanced)))]
    #[case("Beginner", Some(Some(Difficulty::Beginner)))]
    #[case("expert", None)]
    fn level_labels_parse(#[case] input: &str, #[case] expected: Option<Option<Difficulty>>) {
        assert_eq!(parse_level(input).ok(), expected);
    }

    #[rstest]
    fn featured_keeps_catalogue_order(courses: Vec<Course>) {
        let featured: Vec<&str> = featured(&courses).map(|c| c.id.as_str()).collect();
        assert_eq!(featured, ["1", "5"]);
    }

    #[rstest]
    fn liking_twice_unlikes() {
        let mut liked = LikedCourses::default();
        assert!(liked.toggle("2"));
        assert!(liked.toggle("5"));
        assert!(!liked.toggle("2"));
        assert!(!liked.contains("2"));
        assert_eq!(liked.ids(), ["5".to_owned()]);
    }
}
