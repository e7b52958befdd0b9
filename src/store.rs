use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
    TransactionTrait, sea_query::Expr,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::{MovieDetails, RatingReview},
};

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn close(self) -> AppResult<()> {
        self.db.close().await?;
        Ok(())
    }

    /// Inserts a freshly looked-up movie with no rating, review or rank.
    pub async fn add(&self, details: MovieDetails) -> AppResult<movie::Model> {
        let title = details.title.clone();
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(details.title),
            year: Set(details.year),
            description: Set(details.description),
            rating: Set(None),
            ranking: Set(None),
            review: Set(None),
            img_url: Set(details.img_url),
        };

        match model.insert(&self.db).await {
            Ok(movie) => {
                tracing::info!(movie_id = movie.id, title = %movie.title, "movie added");
                Ok(movie)
            },
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::DuplicateTitle(title)),
                _ => Err(err.into()),
            },
        }
    }

    pub async fn list_all(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().all(&self.db).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound(id))
    }

    pub async fn update_rating_review(&self, id: i32, update: RatingReview) -> AppResult<()> {
        update.validate()?;

        let mut active: movie::ActiveModel = self.get_by_id(id).await?.into();
        active.rating = Set(Some(update.rating));
        active.review = Set(update.review);
        active.update(&self.db).await?;

        tracing::info!(movie_id = id, rating = update.rating, "movie rated");
        Ok(())
    }

    /// Persists the `ranking` column of every given movie in one transaction.
    pub async fn save_rankings(&self, movies: &[movie::Model]) -> AppResult<()> {
        let txn = self.db.begin().await?;

        for m in movies {
            movie::Entity::update_many()
                .col_expr(movie::Column::Ranking, Expr::value(m.ranking))
                .filter(movie::Column::Id.eq(m.id))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(id));
        }
        tracing::info!(movie_id = id, "movie deleted");
        Ok(())
    }
}
