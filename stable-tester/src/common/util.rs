pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" office, ,reset,  smoke ");
        assert_eq!(parts, vec!["office", "reset", "smoke"]);
    }

    #[test]
    fn split_csv_empty_input() {
        assert!(split_csv("").is_empty());
        assert!(split_csv(" , ,").is_empty());
    }
}
