use regex::Regex;

pub type Validator = Box<dyn Fn(&str) -> Result<(), String>>;

/// Run `validators` in order, returning the first failure.
pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), String> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

pub fn required() -> Validator {
    Box::new(|value: &str| {
        if value.trim().is_empty() {
            Err("This field is required".to_string())
        } else {
            Ok(())
        }
    })
}

pub fn min_length(min: usize) -> Validator {
    Box::new(move |value: &str| {
        if value.trim().chars().count() < min {
            Err(format!("Minimum length is {}", min))
        } else {
            Ok(())
        }
    })
}

/// Case-insensitive match on the file extension, e.g. `["png", "jpg"]`.
pub fn file_extension(extensions: &[String]) -> Validator {
    let alternatives: Vec<String> = extensions
        .iter()
        .map(|ext| regex::escape(ext.trim_start_matches('.')))
        .collect();
    let pattern = format!(r"(?i)\.({})$", alternatives.join("|"));
    let re = Regex::new(&pattern).expect("escaped extension pattern");
    let listed = extensions.join(", ");
    Box::new(move |value: &str| {
        if re.is_match(value.trim()) {
            Ok(())
        } else {
            Err(format!("Expected one of: {}", listed))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_failure_wins() {
        let validators = vec![required(), min_length(4)];
        assert_eq!(
            run_validators(&validators, "  "),
            Err("This field is required".to_string())
        );
        assert_eq!(
            run_validators(&validators, "abc"),
            Err("Minimum length is 4".to_string())
        );
        assert_eq!(run_validators(&validators, "abcd"), Ok(()));
    }

    #[test]
    fn extension_match_ignores_case_and_leading_dot() {
        let check = file_extension(&[".png".to_string(), "jpg".to_string()]);
        assert!(check("photo.PNG").is_ok());
        assert!(check("photo.jpg").is_ok());
        assert!(check("photo.jpeg").is_err());
        assert!(check("png").is_err());
    }
}
