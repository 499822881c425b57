//! Validation rules for metadata fields

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("请输入{}", field_label));
        }

        let length = value.chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                return Err(format!("{}至少{}个字符", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(format!("{}不能超过{}个字符", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{}不能小于{}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{}不能大于{}", field_label, max));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("  ", "股票代码"),
            Err("请输入股票代码".to_string())
        );
        assert!(rules.validate_string("600000", "股票代码").is_ok());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let rules = ValidationRules {
            max_length: Some(4),
            ..ValidationRules::none()
        };
        assert!(rules.validate_string("浦发银行", "名称").is_ok());
        assert!(rules.validate_string("浦发银行股份", "名称").is_err());
    }

    #[test]
    fn number_bounds() {
        let rules = ValidationRules {
            min: Some(1.0),
            max: Some(4.0),
            ..ValidationRules::none()
        };
        assert!(rules.validate_number(4.0, "季度").is_ok());
        assert_eq!(
            rules.validate_number(5.0, "季度"),
            Err("季度不能大于4".to_string())
        );
    }
}
