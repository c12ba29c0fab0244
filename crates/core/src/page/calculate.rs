use super::{Page, PageConfig, PageError, PageParameter, PageVariables};

/// Resolve the requested limit.
///
/// An absent or empty value falls back to `default_limit`. Anything else must be a
/// non-negative integer no larger than `maximum`.
pub fn calculate_limit(
    requested: Option<&str>,
    default_limit: usize,
    maximum: usize,
) -> Result<usize, PageError> {
    let Some(raw) = requested.filter(|value| !value.is_empty()) else {
        return Ok(default_limit);
    };

    let limit = parse_parameter(PageParameter::Limit, raw)?;
    if limit > maximum {
        return Err(PageError::LimitExceeded {
            value: raw.to_string(),
            maximum,
        });
    }

    Ok(limit)
}

/// Resolve the requested offset. An absent or empty value means zero.
pub fn calculate_offset(requested: Option<&str>) -> Result<usize, PageError> {
    match requested.filter(|value| !value.is_empty()) {
        Some(raw) => parse_parameter(PageParameter::Offset, raw),
        None => Ok(0),
    }
}

/// Normalize a `limit`/`offset` pair against `config`.
///
/// Every problem with the request is reported in one go, ordered limit, offset,
/// then the window check. The window check only needs a valid offset, so it still
/// runs when the limit was rejected.
pub fn calculate_page(
    config: &PageConfig,
    requested_limit: Option<&str>,
    requested_offset: Option<&str>,
) -> Result<Page, Vec<PageError>> {
    let mut errors = Vec::new();

    let limit = calculate_limit(requested_limit, config.default_limit, config.max_results)
        .unwrap_or_else(|err| {
            errors.push(err);
            0
        });

    let offset = match calculate_offset(requested_offset) {
        Ok(offset) => offset,
        Err(err) => {
            errors.push(err);
            return Err(errors);
        }
    };

    let variables = PageVariables {
        default_max_results: config.max_results,
        limit,
        offset,
    };

    match variables.validate() {
        Ok(page) if errors.is_empty() => Ok(page),
        Ok(_) => Err(errors),
        Err(err) => {
            errors.push(err);
            Err(errors)
        }
    }
}

fn parse_parameter(parameter: PageParameter, raw: &str) -> Result<usize, PageError> {
    let number: i64 = raw
        .parse()
        .map_err(|_| PageError::InvalidParameterType {
            parameter,
            value: raw.to_string(),
        })?;

    if number < 0 {
        return Err(PageError::NegativeValue {
            parameter,
            value: raw.to_string(),
        });
    }

    usize::try_from(number).map_err(|_| PageError::InvalidParameterType {
        parameter,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PageConfig {
        PageConfig::new(20, 50)
    }

    #[test]
    fn test_defaults_when_nothing_requested() {
        assert_eq!(calculate_page(&config(), None, None), Ok(Page::new(20, 0)));
        assert_eq!(
            calculate_page(&config(), Some(""), Some("")),
            Ok(Page::new(20, 0))
        );
    }

    #[test]
    fn test_limit_truncated_to_window() {
        assert_eq!(
            calculate_page(&config(), Some("5"), Some("48")),
            Ok(Page::new(2, 48))
        );
    }

    #[test]
    fn test_default_limit_truncated_to_window() {
        assert_eq!(
            calculate_page(&config(), None, Some("40")),
            Ok(Page::new(10, 40))
        );
    }

    #[test]
    fn test_limit_not_a_number() {
        let errors = calculate_page(&config(), Some("abc"), None).unwrap_err();

        assert_eq!(
            errors,
            vec![PageError::InvalidParameterType {
                parameter: PageParameter::Limit,
                value: "abc".to_string(),
            }]
        );
    }

    #[test]
    fn test_negative_limit() {
        assert_eq!(
            calculate_limit(Some("-3"), 20, 50),
            Err(PageError::NegativeValue {
                parameter: PageParameter::Limit,
                value: "-3".to_string(),
            })
        );
    }

    #[test]
    fn test_limit_above_maximum() {
        assert_eq!(
            calculate_limit(Some("51"), 20, 50),
            Err(PageError::LimitExceeded {
                value: "51".to_string(),
                maximum: 50,
            })
        );
        assert_eq!(calculate_limit(Some("50"), 20, 50), Ok(50));
    }

    #[test]
    fn test_zero_limit_is_allowed() {
        assert_eq!(calculate_limit(Some("0"), 20, 50), Ok(0));
    }

    #[test]
    fn test_offset_errors() {
        assert_eq!(
            calculate_offset(Some("1.5")),
            Err(PageError::InvalidParameterType {
                parameter: PageParameter::Offset,
                value: "1.5".to_string(),
            })
        );
        assert_eq!(
            calculate_offset(Some("-1")),
            Err(PageError::NegativeValue {
                parameter: PageParameter::Offset,
                value: "-1".to_string(),
            })
        );
        assert_eq!(calculate_offset(Some("7")), Ok(7));
    }

    #[test]
    fn test_huge_number_is_wrong_type() {
        assert!(matches!(
            calculate_offset(Some("99999999999999999999999")),
            Err(PageError::InvalidParameterType { .. })
        ));
    }

    #[test]
    fn test_offset_at_maximum_rejected_regardless_of_limit() {
        for limit in [None, Some("0"), Some("1"), Some("50")] {
            let errors = calculate_page(&config(), limit, Some("50")).unwrap_err();
            assert_eq!(
                errors,
                vec![PageError::OffsetExceedsMaximum {
                    offset: 50,
                    maximum: 50,
                }]
            );
        }
    }

    #[test]
    fn test_all_errors_reported_together() {
        let errors = calculate_page(&config(), Some("abc"), Some("-2")).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].parameter(), PageParameter::Limit);
        assert_eq!(errors[1].parameter(), PageParameter::Offset);
    }

    #[test]
    fn test_limit_error_and_offset_past_window() {
        let errors = calculate_page(&config(), Some("500"), Some("75")).unwrap_err();

        assert_eq!(
            errors,
            vec![
                PageError::LimitExceeded {
                    value: "500".to_string(),
                    maximum: 50,
                },
                PageError::OffsetExceedsMaximum {
                    offset: 75,
                    maximum: 50,
                },
            ]
        );
    }
}
