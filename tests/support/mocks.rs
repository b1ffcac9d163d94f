// tests/support/mocks.rs
use async_trait::async_trait;
use news_service::domain::errors::{DomainError, DomainResult};
use news_service::domain::news::{
    CategoryId, NewNews, News, NewsId, NewsReadRepository, NewsUpdate, NewsWithCategories,
    NewsWriteRepository,
};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Arguments of one `NewsWriteRepository::update` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpdate {
    pub id: i64,
    pub update: NewsUpdate,
    pub categories: Option<Vec<i64>>,
}

#[derive(Default)]
struct Store {
    records: BTreeMap<i64, (News, Vec<i64>)>,
    next_id: i64,
    updates: Vec<RecordedUpdate>,
    pages: Vec<(i64, i64)>,
    failure: Option<String>,
}

/// In-memory news store that records the calls it receives.
#[derive(Default)]
pub struct InMemoryNewsRepo {
    inner: Mutex<Store>,
}

fn link_ids(categories: &[CategoryId]) -> Vec<i64> {
    let mut ids: Vec<i64> = categories.iter().copied().map(i64::from).collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

impl InMemoryNewsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a persistence error carrying `detail`.
    pub fn failing(detail: &str) -> Self {
        let repo = Self::default();
        repo.inner.lock().unwrap().failure = Some(detail.to_owned());
        repo
    }

    pub fn seed(&self, title: &str, content: &str, categories: &[i64]) -> i64 {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        let news = News {
            id: NewsId(id),
            title: title.to_owned(),
            content: content.to_owned(),
        };
        store.records.insert(id, (news, categories.to_vec()));
        id
    }

    pub fn get(&self, id: i64) -> Option<NewsWithCategories> {
        let store = self.inner.lock().unwrap();
        store
            .records
            .get(&id)
            .map(|(news, categories)| NewsWithCategories {
                news: news.clone(),
                categories: categories.clone(),
            })
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().records.len()
    }

    pub fn updates(&self) -> Vec<RecordedUpdate> {
        self.inner.lock().unwrap().updates.clone()
    }

    pub fn pages(&self) -> Vec<(i64, i64)> {
        self.inner.lock().unwrap().pages.clone()
    }

    fn check(store: &Store) -> DomainResult<()> {
        match &store.failure {
            Some(detail) => Err(DomainError::Persistence(detail.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NewsWriteRepository for InMemoryNewsRepo {
    async fn create(&self, news: NewNews) -> DomainResult<NewsId> {
        let mut store = self.inner.lock().unwrap();
        Self::check(&store)?;

        store.next_id += 1;
        let id = store.next_id;
        let record = News {
            id: NewsId(id),
            title: news.title,
            content: news.content,
        };
        store
            .records
            .insert(id, (record, link_ids(&news.categories)));
        Ok(NewsId(id))
    }

    async fn update(
        &self,
        id: NewsId,
        update: NewsUpdate,
        categories: Option<Vec<CategoryId>>,
    ) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        Self::check(&store)?;

        store.updates.push(RecordedUpdate {
            id: id.0,
            update: update.clone(),
            categories: categories
                .as_ref()
                .map(|ids| ids.iter().copied().map(i64::from).collect()),
        });

        let Some((news, links)) = store.records.get_mut(&id.0) else {
            return Err(DomainError::NotFound("News not found".into()));
        };
        update.apply_to(news);
        if let Some(categories) = categories {
            *links = link_ids(&categories);
        }
        Ok(())
    }
}

#[async_trait]
impl NewsReadRepository for InMemoryNewsRepo {
    async fn list_page(&self, limit: i64, offset: i64) -> DomainResult<Vec<NewsWithCategories>> {
        let mut store = self.inner.lock().unwrap();
        Self::check(&store)?;
        store.pages.push((limit, offset));

        Ok(store
            .records
            .values()
            .skip(usize::try_from(offset).unwrap())
            .take(usize::try_from(limit).unwrap())
            .map(|(news, categories)| NewsWithCategories {
                news: news.clone(),
                categories: categories.clone(),
            })
            .collect())
    }
}
