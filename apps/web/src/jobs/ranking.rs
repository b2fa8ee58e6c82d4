//! Salary ranking for recommendation results.

use crate::models::job::JobRecommendation;

/// How many recommendations survive into the results page.
pub const TOP_RECOMMENDATIONS: usize = 3;

/// Sorts jobs by salary, highest first, and keeps at most `limit` of them.
/// The sort is stable: jobs with equal salaries keep the API's order.
pub fn top_by_salary(mut jobs: Vec<JobRecommendation>, limit: usize) -> Vec<JobRecommendation> {
    jobs.sort_by(|a, b| b.salary_value().total_cmp(&a.salary_value()));
    jobs.truncate(limit);
    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn job(title: &str, salary: serde_json::Value) -> JobRecommendation {
        serde_json::from_value(json!({ "title": title, "salary": salary })).unwrap()
    }

    fn salaries(jobs: &[JobRecommendation]) -> Vec<f64> {
        jobs.iter().map(JobRecommendation::salary_value).collect()
    }

    #[test]
    fn test_top_three_by_salary_descending() {
        let jobs = vec![
            job("a", json!(50000)),
            job("b", json!(90000)),
            job("c", json!(70000)),
            job("d", json!(60000)),
        ];

        let top = top_by_salary(jobs, TOP_RECOMMENDATIONS);

        assert_eq!(salaries(&top), vec![90000.0, 70000.0, 60000.0]);
    }

    #[test]
    fn test_empty_list_stays_empty() {
        assert!(top_by_salary(Vec::new(), TOP_RECOMMENDATIONS).is_empty());
    }

    #[test]
    fn test_fewer_than_limit_are_all_kept() {
        let top = top_by_salary(vec![job("a", json!(10)), job("b", json!(20))], 3);
        assert_eq!(salaries(&top), vec![20.0, 10.0]);
    }

    #[test]
    fn test_equal_salaries_keep_api_order() {
        let jobs = vec![
            job("first", json!(80000)),
            job("second", json!(80000)),
            job("third", json!(80000)),
            job("fourth", json!(80000)),
        ];

        let top = top_by_salary(jobs, 3);
        let titles: Vec<_> = top.iter().filter_map(JobRecommendation::title).collect();

        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_mixed_integer_and_float_salaries() {
        let jobs = vec![job("a", json!(55000.5)), job("b", json!(55000)), job("c", json!(-1))];
        let top = top_by_salary(jobs, 3);
        assert_eq!(salaries(&top), vec![55000.5, 55000.0, -1.0]);
    }
}
