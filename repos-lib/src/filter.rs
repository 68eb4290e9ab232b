use crate::object_model::Repository;

/// Client-side narrowing and ordering applied to a fully fetched collection.
#[derive(Clone, Debug, Default)]
pub struct RepoFilter {
    pub language: Option<String>,
    pub sort_by_stars: bool,
}

impl RepoFilter {
    pub fn is_empty(&self) -> bool {
        self.language.is_none() && !self.sort_by_stars
    }

    pub fn apply(&self, repos: Vec<Repository>) -> Vec<Repository> {
        let mut repos = match &self.language {
            Some(language) => repos
                .into_iter()
                .filter(|r| r.language.as_deref() == Some(language.as_str()))
                .collect(),
            None => repos,
        };

        if self.sort_by_stars {
            // sort_by is stable
            repos.sort_by(|a, b| a.stargazers_count.cmp(&b.stargazers_count));
        }

        repos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(url: &str, language: Option<&str>, stars: u64) -> Repository {
        Repository {
            html_url: String::from(url),
            description: None,
            language: language.map(String::from),
            stargazers_count: stars,
        }
    }

    fn urls(repos: &[Repository]) -> Vec<&str> {
        repos.iter().map(|r| r.html_url.as_str()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let repos = vec![repo("a", Some("Go"), 2), repo("b", None, 1)];
        let filter = RepoFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(repos.clone()), repos);
    }

    #[test]
    fn language_filter_is_exact_and_ordered() {
        let repos = vec![
            repo("a", Some("Go"), 0),
            repo("b", Some("JavaScript"), 0),
            repo("c", Some("Go"), 0),
            repo("d", Some("go"), 0),
            repo("e", None, 0),
        ];
        let filter = RepoFilter {
            language: Some(String::from("Go")),
            ..Default::default()
        };
        assert_eq!(urls(&filter.apply(repos)), ["a", "c"]);
    }

    #[test]
    fn star_sort_is_stable() {
        let repos = vec![
            repo("first-five", None, 5),
            repo("one", None, 1),
            repo("second-five", None, 5),
            repo("three", None, 3),
        ];
        let filter = RepoFilter {
            sort_by_stars: true,
            ..Default::default()
        };
        let sorted = filter.apply(repos);
        assert_eq!(
            sorted.iter().map(|r| r.stargazers_count).collect::<Vec<_>>(),
            [1, 3, 5, 5]
        );
        assert_eq!(urls(&sorted), ["one", "three", "first-five", "second-five"]);
    }
}
