use std::cmp::Ordering;

use crate::entities::movie;

/// Sorts movies by ascending rating (unrated first, ties keep input order) and
/// assigns `ranking = len - index`, so the best-rated movie ends up with rank 1
/// and unrated movies take the highest rank numbers.
pub fn rank(mut movies: Vec<movie::Model>) -> Vec<movie::Model> {
    movies.sort_by(|a, b| cmp_rating(a.rating, b.rating));

    let total = movies.len();
    for (index, m) in movies.iter_mut().enumerate() {
        m.ranking = Some((total - index) as i32);
    }
    movies
}

fn cmp_rating(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.total_cmp(&b),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn movie(id: i32, title: &str, rating: Option<f64>) -> movie::Model {
        movie::Model {
            id,
            title: title.to_string(),
            year: 2000,
            description: String::new(),
            rating,
            ranking: None,
            review: None,
            img_url: String::new(),
        }
    }

    fn by_rank(movies: &[movie::Model]) -> Vec<(&str, i32)> {
        let mut out: Vec<_> =
            movies.iter().map(|m| (m.title.as_str(), m.ranking.unwrap())).collect();
        out.sort_by_key(|(_, r)| *r);
        out
    }

    #[test]
    fn best_rating_gets_rank_one_and_unrated_goes_last() {
        let ranked =
            rank(vec![movie(1, "A", Some(8.0)), movie(2, "B", None), movie(3, "C", Some(3.0))]);

        assert_eq!(by_rank(&ranked), [("A", 1), ("C", 2), ("B", 3)]);
    }

    #[test]
    fn ranks_are_dense_for_any_length() {
        for n in 0..40 {
            let movies = (0..n)
                .map(|i| {
                    let rating = (i % 3 != 0).then(|| f64::from((i * 7) % 11));
                    movie(i, &format!("m{i}"), rating)
                })
                .collect();

            let ranked = rank(movies);
            let ranks: BTreeSet<i32> = ranked.iter().map(|m| m.ranking.unwrap()).collect();
            assert_eq!(ranks, (1..=n).collect::<BTreeSet<_>>());

            if let Some(top) = ranked.iter().find(|m| m.ranking == Some(1)) {
                let max = ranked.iter().filter_map(|m| m.rating).fold(None, |acc: Option<f64>, r| {
                    Some(acc.map_or(r, |a| a.max(r)))
                });
                assert_eq!(top.rating, max);
            }
        }
    }

    #[test]
    fn reranking_is_idempotent() {
        let once = rank(vec![
            movie(1, "A", Some(5.0)),
            movie(2, "B", Some(5.0)),
            movie(3, "C", None),
            movie(4, "D", Some(9.5)),
        ]);
        let twice = rank(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank(vec![movie(1, "first", Some(6.0)), movie(2, "second", Some(6.0))]);

        assert_eq!(by_rank(&ranked), [("second", 1), ("first", 2)]);
    }
}
