use nutype::nutype;

/// Validated pagination inputs of a single call to a pageable handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSelection {
    pub page: PageNumber,
    pub size: PageSize,
}

/// Zero-based page index.
#[nutype(
    validate(greater_or_equal = PageNumber::MIN),
    derive(Debug, Clone, Copy, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct PageNumber(i64);

impl PageNumber {
    pub const MIN: i64 = 0;

    pub fn first() -> Self {
        Self::try_new(Self::MIN).unwrap()
    }
}

/// Requested page length.
#[nutype(
    validate(greater_or_equal = PageSize::MIN, less_or_equal = PageSize::MAX),
    derive(Debug, Clone, Copy, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct PageSize(i64);

impl PageSize {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 100;

    pub fn max() -> Self {
        Self::try_new(Self::MAX).unwrap()
    }
}
