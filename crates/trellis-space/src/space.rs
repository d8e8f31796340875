use serde::{Deserialize, Serialize};

// ── Values ───────────────────────────────────────────────────────────

/// A concrete value a parameter can take in a generated test case.
///
/// Values are opaque to the engine and compared by equality only.
/// `Null` is an ordinary domain member (e.g. "no coupon applied"), not a
/// missing-parameter marker: a domain may list it alongside real values and
/// it participates in coverage like any other member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

// ── Parameters ───────────────────────────────────────────────────────

/// A named test input with a fixed, ordered domain of candidate values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub values: Vec<Value>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of values in this parameter's domain.
    pub fn cardinality(&self) -> usize {
        self.values.len()
    }
}

/// Errors raised when a parameter space fails structural validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpaceError {
    #[error("parameter space declares no parameters")]
    EmptySpace,

    #[error("parameter '{parameter}' declares no values")]
    EmptyDomain { parameter: String },
}

/// An ordered, immutable declaration of parameters and their domains.
///
/// Parameter order is significant: it defines the column order of every
/// generated test case and is preserved by all strategies, regardless of any
/// reordering a generator uses internally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpace {
    pub parameters: Vec<Parameter>,
}

impl ParameterSpace {
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self { parameters }
    }

    /// Number of parameters (test-case arity).
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Check the structural invariants: at least one parameter, and every
    /// parameter has at least one value.
    pub fn validate(&self) -> Result<(), SpaceError> {
        if self.parameters.is_empty() {
            return Err(SpaceError::EmptySpace);
        }
        for param in &self.parameters {
            if param.values.is_empty() {
                return Err(SpaceError::EmptyDomain {
                    parameter: param.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Domain sizes in declared order.
    pub fn cardinalities(&self) -> Vec<usize> {
        self.parameters.iter().map(Parameter::cardinality).collect()
    }

    /// Largest domain size across all parameters (0 for an empty space).
    pub fn max_cardinality(&self) -> usize {
        self.parameters
            .iter()
            .map(Parameter::cardinality)
            .max()
            .unwrap_or(0)
    }

    /// Size of the full cross product, saturating at `u64::MAX`.
    pub fn total_combinations(&self) -> u64 {
        self.parameters
            .iter()
            .map(|p| p.cardinality() as u64)
            .fold(1, u64::saturating_mul)
    }

    /// Total number of 2-way value requirements across all parameter pairs:
    /// sum over i < j of |domain(i)| * |domain(j)|, saturating.
    pub fn pair_requirement_count(&self) -> u64 {
        let cards = self.cardinalities();
        let mut total: u64 = 0;
        for i in 0..cards.len() {
            for j in (i + 1)..cards.len() {
                total = total.saturating_add((cards[i] as u64).saturating_mul(cards[j] as u64));
            }
        }
        total
    }
}

// ── Test cases ───────────────────────────────────────────────────────

/// One complete assignment of a value to every parameter, i.e. one test case.
///
/// `values[i]` belongs to the domain of the i-th declared parameter, so a
/// case can be injected positionally into a parameterized-test mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestCase {
    pub values: Vec<Value>,
}

impl TestCase {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Number of columns, matching the declaring space's parameter count.
    pub fn arity(&self) -> usize {
        self.values.len()
    }
}

impl std::fmt::Display for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}
