// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

use makimono_core::application::error::{ApplicationError, ApplicationResult};
use makimono_core::application::ports::security::PasswordHasher;
use makimono_core::application::ports::time::Clock;
use makimono_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleTitle, ArticleWriteRepository, NewArticle,
    NewRevision, Revision, RevisionId, RevisionRepository,
};
use makimono_core::domain::errors::{DomainError, DomainResult};
use makimono_core::domain::taxonomy::{
    Category, CategoryId, CategoryName, NewCategory, NewTag, Tag, TagId, TagName,
    TaxonomyRepository,
};
use makimono_core::domain::user::{
    EmailAddress, NewUser, User, UserId, UserRepository, Username,
};

/// Shared in-memory backing store for all mock repositories, so that the
/// article, revision, and taxonomy mocks observe each other's writes the
/// way the Postgres implementations observe one database.
#[derive(Default)]
pub struct MockDb {
    users: Mutex<Vec<User>>,
    articles: Mutex<Vec<Article>>,
    revisions: Mutex<Vec<Revision>>,
    categories: Mutex<Vec<Category>>,
    tags: Mutex<Vec<Tag>>,
    article_categories: Mutex<Vec<(i64, i64)>>,
    article_tags: Mutex<Vec<(i64, i64)>>,
    next_user_id: AtomicI64,
    next_article_id: AtomicI64,
    next_revision_id: AtomicI64,
    next_category_id: AtomicI64,
    next_tag_id: AtomicI64,
}

impl MockDb {
    pub fn new() -> Self {
        let db = Self::default();
        db.next_user_id.store(1, Ordering::SeqCst);
        db.next_article_id.store(1, Ordering::SeqCst);
        db.next_revision_id.store(1, Ordering::SeqCst);
        db.next_category_id.store(1, Ordering::SeqCst);
        db.next_tag_id.store(1, Ordering::SeqCst);
        db
    }

    pub fn seed_category(&self, name: &str) -> i64 {
        let id = self.next_category_id.fetch_add(1, Ordering::SeqCst);
        self.categories.lock().unwrap().push(Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
            parent_id: None,
        });
        id
    }

    pub fn seed_tag(&self, name: &str) -> i64 {
        let id = self.next_tag_id.fetch_add(1, Ordering::SeqCst);
        self.tags.lock().unwrap().push(Tag {
            id: TagId::new(id).unwrap(),
            name: TagName::new(name).unwrap(),
        });
        id
    }

    pub fn deactivate_user(&self, username: &str) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users
            .iter_mut()
            .find(|user| user.username.as_str() == username)
        {
            user.deactivate();
        }
    }

    pub fn revision_count(&self, article_id: i64) -> usize {
        self.revisions
            .lock()
            .unwrap()
            .iter()
            .filter(|revision| i64::from(revision.article_id) == article_id)
            .count()
    }
}

pub struct MockUserRepo(pub Arc<MockDb>);

#[async_trait]
impl UserRepository for MockUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.0.users.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.0.users.lock().unwrap();
        if users
            .iter()
            .any(|user| user.username.as_str() == new_user.username.as_str())
        {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        if users
            .iter()
            .any(|user| user.email.as_str() == new_user.email.as_str())
        {
            return Err(DomainError::Conflict("email already exists".into()));
        }

        let id = self.0.next_user_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.username.as_str() == username.as_str())
            .cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.email.as_str() == email.as_str())
            .cloned())
    }
}

pub struct MockArticleWriteRepo(pub Arc<MockDb>);

#[async_trait]
impl ArticleWriteRepository for MockArticleWriteRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.0.articles.lock().unwrap();
        if articles
            .iter()
            .any(|existing| existing.title.as_str() == article.title.as_str())
        {
            return Err(DomainError::Conflict("article title already exists".into()));
        }

        for category_id in &article.category_ids {
            let categories = self.0.categories.lock().unwrap();
            if !categories.iter().any(|c| c.id == *category_id) {
                return Err(DomainError::NotFound("referenced record not found".into()));
            }
        }
        for tag_id in &article.tag_ids {
            let tags = self.0.tags.lock().unwrap();
            if !tags.iter().any(|t| t.id == *tag_id) {
                return Err(DomainError::NotFound("referenced record not found".into()));
            }
        }

        let id = self.0.next_article_id.fetch_add(1, Ordering::SeqCst);
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            is_redirect: article.is_redirect,
            created_by: article.created_by,
            created_at: article.created_at,
        };
        articles.push(stored.clone());

        let revision_id = self.0.next_revision_id.fetch_add(1, Ordering::SeqCst);
        self.0.revisions.lock().unwrap().push(Revision {
            id: RevisionId::new(revision_id)?,
            article_id: stored.id,
            content: article.content,
            edited_by: article.created_by,
            edited_at: article.created_at,
            summary: article.summary,
        });

        let mut links = self.0.article_categories.lock().unwrap();
        for category_id in article.category_ids {
            links.push((id, i64::from(category_id)));
        }
        drop(links);

        let mut links = self.0.article_tags.lock().unwrap();
        for tag_id in article.tag_ids {
            links.push((id, i64::from(tag_id)));
        }

        Ok(stored)
    }
}

pub struct MockArticleReadRepo(pub Arc<MockDb>);

fn newest_first(mut articles: Vec<Article>) -> Vec<Article> {
    articles.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
    });
    articles
}

#[async_trait]
impl ArticleReadRepository for MockArticleReadRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .0
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|article| article.id == id)
            .cloned())
    }

    async fn find_by_title(&self, title: &ArticleTitle) -> DomainResult<Option<Article>> {
        Ok(self
            .0
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|article| article.title.as_str() == title.as_str())
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(newest_first(self.0.articles.lock().unwrap().clone()))
    }

    async fn search_by_title(&self, query: &str) -> DomainResult<Vec<Article>> {
        let needle = query.to_lowercase();
        let matches = self
            .0
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|article| article.title.as_str().to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(newest_first(matches))
    }

    async fn list_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<Article>> {
        let linked: Vec<i64> = self
            .0
            .article_categories
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, cid)| *cid == i64::from(category_id))
            .map(|(aid, _)| *aid)
            .collect();
        let matches = self
            .0
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|article| linked.contains(&i64::from(article.id)))
            .cloned()
            .collect();
        Ok(newest_first(matches))
    }

    async fn list_by_tag(&self, tag_id: TagId) -> DomainResult<Vec<Article>> {
        let linked: Vec<i64> = self
            .0
            .article_tags
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, tid)| *tid == i64::from(tag_id))
            .map(|(aid, _)| *aid)
            .collect();
        let matches = self
            .0
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|article| linked.contains(&i64::from(article.id)))
            .cloned()
            .collect();
        Ok(newest_first(matches))
    }
}

pub struct MockRevisionRepo(pub Arc<MockDb>);

fn newest_revision_first(mut revisions: Vec<Revision>) -> Vec<Revision> {
    revisions.sort_by(|a, b| {
        b.edited_at
            .cmp(&a.edited_at)
            .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
    });
    revisions
}

#[async_trait]
impl RevisionRepository for MockRevisionRepo {
    async fn append(&self, revision: NewRevision) -> DomainResult<Revision> {
        let id = self.0.next_revision_id.fetch_add(1, Ordering::SeqCst);
        let stored = Revision {
            id: RevisionId::new(id)?,
            article_id: revision.article_id,
            content: revision.content,
            edited_by: revision.edited_by,
            edited_at: revision.edited_at,
            summary: revision.summary,
        };
        self.0.revisions.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn latest_for_article(&self, article_id: ArticleId) -> DomainResult<Option<Revision>> {
        Ok(self.list_for_article(article_id).await?.into_iter().next())
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Revision>> {
        let matches = self
            .0
            .revisions
            .lock()
            .unwrap()
            .iter()
            .filter(|revision| revision.article_id == article_id)
            .cloned()
            .collect();
        Ok(newest_revision_first(matches))
    }
}

pub struct MockTaxonomyRepo(pub Arc<MockDb>);

#[async_trait]
impl TaxonomyRepository for MockTaxonomyRepo {
    async fn insert_category(&self, category: NewCategory) -> DomainResult<Category> {
        let mut categories = self.0.categories.lock().unwrap();
        if categories
            .iter()
            .any(|existing| existing.name.as_str() == category.name.as_str())
        {
            return Err(DomainError::Conflict("category name already exists".into()));
        }
        let id = self.0.next_category_id.fetch_add(1, Ordering::SeqCst);
        let stored = Category {
            id: CategoryId::new(id)?,
            name: category.name,
            parent_id: category.parent_id,
        };
        categories.push(stored.clone());
        Ok(stored)
    }

    async fn insert_tag(&self, tag: NewTag) -> DomainResult<Tag> {
        let mut tags = self.0.tags.lock().unwrap();
        if tags
            .iter()
            .any(|existing| existing.name.as_str() == tag.name.as_str())
        {
            return Err(DomainError::Conflict("tag name already exists".into()));
        }
        let id = self.0.next_tag_id.fetch_add(1, Ordering::SeqCst);
        let stored = Tag {
            id: TagId::new(id)?,
            name: tag.name,
        };
        tags.push(stored.clone());
        Ok(stored)
    }

    async fn find_category(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self
            .0
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|category| category.id == id)
            .cloned())
    }

    async fn find_tag(&self, id: TagId) -> DomainResult<Option<Tag>> {
        Ok(self
            .0
            .tags
            .lock()
            .unwrap()
            .iter()
            .find(|tag| tag.id == id)
            .cloned())
    }

    async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        let mut categories = self.0.categories.lock().unwrap().clone();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }

    async fn list_tags(&self) -> DomainResult<Vec<Tag>> {
        let mut tags = self.0.tags.lock().unwrap().clone();
        tags.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(tags)
    }

    async fn categories_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Category>> {
        let linked: Vec<i64> = self
            .0
            .article_categories
            .lock()
            .unwrap()
            .iter()
            .filter(|(aid, _)| *aid == i64::from(article_id))
            .map(|(_, cid)| *cid)
            .collect();
        let mut matches: Vec<Category> = self
            .0
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|category| linked.contains(&i64::from(category.id)))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(matches)
    }

    async fn tags_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>> {
        let linked: Vec<i64> = self
            .0
            .article_tags
            .lock()
            .unwrap()
            .iter()
            .filter(|(aid, _)| *aid == i64::from(article_id))
            .map(|(_, tid)| *tid)
            .collect();
        let mut matches: Vec<Tag> = self
            .0
            .tags
            .lock()
            .unwrap()
            .iter()
            .filter(|tag| linked.contains(&i64::from(tag.id)))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(matches)
    }
}

/// Deterministic hasher so tests never pay the Argon2 cost.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed::{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Clock that only moves when a test advances it.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn starting_at(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(now),
        })
    }

    pub fn advance(&self, duration: chrono::Duration) {
        let mut now = self.now.lock().unwrap();
        *now += duration;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
