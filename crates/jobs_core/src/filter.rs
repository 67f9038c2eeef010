use std::collections::BTreeSet;
use std::fmt;

/// Employment types understood by the listing service.
///
/// Ordering follows declaration order, which is also the order used when the
/// set is serialized into a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Freelance,
    Internship,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Freelance,
        EmploymentType::Internship,
    ];

    /// Identifier sent in the `employment_type` query parameter.
    pub fn as_api_str(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "FULLTIME",
            EmploymentType::PartTime => "PARTTIME",
            EmploymentType::Freelance => "FREELANCE",
            EmploymentType::Internship => "INTERNSHIP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full Time",
            EmploymentType::PartTime => "Part Time",
            EmploymentType::Freelance => "Freelance",
            EmploymentType::Internship => "Internship",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    pub minimum_package: u64,
    pub label: &'static str,
}

/// Salary floors offered by the filter group.
pub const SALARY_RANGES: [SalaryRange; 4] = [
    SalaryRange {
        minimum_package: 1_000_000,
        label: "10 LPA and above",
    },
    SalaryRange {
        minimum_package: 2_000_000,
        label: "20 LPA and above",
    },
    SalaryRange {
        minimum_package: 3_000_000,
        label: "30 LPA and above",
    },
    SalaryRange {
        minimum_package: 4_000_000,
        label: "40 LPA and above",
    },
];

/// The three independent filter dimensions. Defaults mean "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    employment_types: BTreeSet<EmploymentType>,
    minimum_salary: u64,
    search_term: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employment_types(&self) -> &BTreeSet<EmploymentType> {
        &self.employment_types
    }

    pub fn minimum_salary(&self) -> u64 {
        self.minimum_salary
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Adds or removes `kind`. Returns whether the set content changed.
    pub fn set_employment_type(&mut self, kind: EmploymentType, included: bool) -> bool {
        if included {
            self.employment_types.insert(kind)
        } else {
            self.employment_types.remove(&kind)
        }
    }

    pub fn set_minimum_salary(&mut self, value: u64) -> bool {
        let changed = self.minimum_salary != value;
        self.minimum_salary = value;
        changed
    }

    pub fn set_search_term(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        let changed = self.search_term != value;
        self.search_term = value;
        changed
    }

    /// Comma-joined employment type identifiers; empty when no type is selected.
    pub fn employment_type_segment(&self) -> String {
        self.employment_types
            .iter()
            .map(|kind| kind.as_api_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "types=[{}] min_package={} search={:?}",
            self.employment_type_segment(),
            self.minimum_salary,
            self.search_term
        )
    }
}
