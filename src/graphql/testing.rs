/// In-memory transports for unit tests.
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use serde_json::{Map, Value, json};

use super::errors::GraphQlError;
use super::request::GraphQlRequest;
use super::transport::Transport;
use crate::types::{Page, PageTag, Tag};
use crate::wiki::queries;

/// A page with content `# <title>` in the default locale.
pub fn sample_page(id: i64, path: &str, title: &str) -> Page {
    Page {
        id,
        path: path.to_owned(),
        locale: Some("zh".to_owned()),
        title: title.to_owned(),
        description: None,
        content: Some(format!("# {title}")),
        content_type: Some("markdown".to_owned()),
        created_at: Some("2024-05-01T08:00:00Z".to_owned()),
        updated_at: Some("2024-05-01T08:00:00Z".to_owned()),
        tags: Vec::new(),
    }
}

/// Replays canned response bodies in order and records every request.
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Value>>,
    requests: RefCell<Vec<(String, Option<Value>)>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Value>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// `(query, variables)` of every request sent so far.
    pub fn requests(&self) -> Vec<(String, Option<Value>)> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &GraphQlRequest<'_>) -> Result<Map<String, Value>, GraphQlError> {
        self.requests
            .borrow_mut()
            .push((request.query.to_owned(), request.variables.cloned()));
        let body = self
            .responses
            .borrow_mut()
            .pop_front()
            .expect("scripted transport ran out of responses");
        Ok(body.as_object().cloned().unwrap_or_default())
    }
}

/// A stateful fake wiki server that understands the client's documents.
pub struct MemoryWiki {
    pages: RefCell<Vec<Page>>,
    tags: RefCell<Vec<Tag>>,
    next_id: Cell<i64>,
    calls: RefCell<Vec<&'static str>>,
}

impl MemoryWiki {
    pub fn new() -> Self {
        Self {
            pages: RefCell::new(Vec::new()),
            tags: RefCell::new(Vec::new()),
            next_id: Cell::new(100),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_page(self, page: Page) -> Self {
        self.pages.borrow_mut().push(page);
        self
    }

    pub fn with_tag(self, tag: &str, title: Option<&str>) -> Self {
        let id = i64::try_from(self.tags.borrow().len()).unwrap_or(0) + 1;
        self.tags.borrow_mut().push(Tag {
            id,
            tag: tag.to_owned(),
            title: title.map(str::to_owned),
            ..Tag::default()
        });
        self
    }

    /// Snapshot of stored pages.
    pub fn pages(&self) -> Vec<Page> {
        self.pages.borrow().clone()
    }

    /// Operation names handled so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn handle(&self, query: &str, vars: &Value) -> Value {
        let op = operation(query);
        self.calls.borrow_mut().push(op);
        match op {
            "list" => self.list(vars),
            "single" => {
                let id = vars["id"].as_i64().unwrap_or_default();
                let page = self.pages.borrow().iter().find(|p| p.id == id).cloned();
                json!({ "pages": { "single": page } })
            }
            "singleByPath" => {
                let page = self.find_by_path(str_var(vars, "path"), str_var(vars, "locale"));
                json!({ "pages": { "singleByPath": page } })
            }
            "search" => self.search(str_var(vars, "query")),
            "create" => self.create(vars),
            "update" => self.update(vars),
            "delete" => {
                let id = vars["id"].as_i64().unwrap_or_default();
                let before = self.pages.borrow().len();
                self.pages.borrow_mut().retain(|p| p.id != id);
                let found = self.pages.borrow().len() != before;
                json!({ "pages": { "delete": { "responseResult": result(found) } } })
            }
            "render" => {
                let id = vars["id"].as_i64().unwrap_or_default();
                let found = self.pages.borrow().iter().any(|p| p.id == id);
                json!({ "pages": { "render": { "responseResult": result(found) } } })
            }
            "tags" => {
                let tags = self.tags.borrow().clone();
                json!({ "pages": { "tags": tags } })
            }
            _ => Value::Null,
        }
    }

    fn find_by_path(&self, path: &str, locale: &str) -> Option<Page> {
        self.pages
            .borrow()
            .iter()
            .find(|p| p.path == path && p.locale.as_deref() == Some(locale))
            .cloned()
    }

    fn list(&self, vars: &Value) -> Value {
        let limit = usize::try_from(vars["limit"].as_u64().unwrap_or(100)).unwrap_or(usize::MAX);
        let mut pages = self.pages();
        pages.sort_by(|a, b| a.path.cmp(&b.path));
        let list: Vec<Page> = pages
            .into_iter()
            .take(limit)
            .map(|p| Page {
                content: None,
                content_type: None,
                tags: Vec::new(),
                ..p
            })
            .collect();
        json!({ "pages": { "list": list } })
    }

    fn search(&self, text: &str) -> Value {
        let needle = text.to_lowercase();
        let hits: Vec<Value> = self
            .pages
            .borrow()
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.content.as_deref().unwrap_or("").to_lowercase().contains(&needle)
            })
            .map(|p| {
                json!({
                    "id": p.id.to_string(),
                    "title": p.title,
                    "description": p.description,
                    "path": p.path,
                    "locale": p.locale,
                })
            })
            .collect();
        json!({ "pages": { "search": {
            "results": hits,
            "suggestions": [],
            "totalHits": hits.len(),
        } } })
    }

    fn create(&self, vars: &Value) -> Value {
        let path = str_var(vars, "path");
        let locale = str_var(vars, "locale");
        if self.find_by_path(path, locale).is_some() {
            return json!({ "pages": { "create": {
                "responseResult": {
                    "succeeded": false,
                    "errorCode": 6002,
                    "slug": "PageDuplicateCreate",
                    "message":
                        "Cannot create this page because an entry already exists at the same path."
                },
                "page": null
            } } });
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let page = Page {
            id,
            path: path.to_owned(),
            locale: Some(locale.to_owned()),
            title: str_var(vars, "title").to_owned(),
            description: Some(str_var(vars, "description").to_owned()),
            content: Some(str_var(vars, "content").to_owned()),
            content_type: Some(str_var(vars, "editor").to_owned()),
            created_at: None,
            updated_at: None,
            tags: tags_var(vars),
        };
        self.pages.borrow_mut().push(page);
        json!({ "pages": { "create": {
            "responseResult": result(true),
            "page": { "id": id, "path": path, "title": str_var(vars, "title") }
        } } })
    }

    fn update(&self, vars: &Value) -> Value {
        let id = vars["id"].as_i64().unwrap_or_default();
        let mut pages = self.pages.borrow_mut();
        let Some(page) = pages.iter_mut().find(|p| p.id == id) else {
            return json!({ "pages": { "update": {
                "responseResult": result(false),
                "page": null
            } } });
        };
        page.content = Some(str_var(vars, "content").to_owned());
        page.title = str_var(vars, "title").to_owned();
        page.description = Some(str_var(vars, "description").to_owned());
        page.tags = tags_var(vars);
        page.updated_at = Some("2024-06-01T00:00:00Z".to_owned());
        json!({ "pages": { "update": {
            "responseResult": result(true),
            "page": {
                "id": page.id,
                "path": page.path,
                "title": page.title,
                "updatedAt": page.updated_at
            }
        } } })
    }
}

impl Transport for MemoryWiki {
    fn send(&self, request: &GraphQlRequest<'_>) -> Result<Map<String, Value>, GraphQlError> {
        let vars = request.variables.cloned().unwrap_or(Value::Null);
        let mut body = Map::new();
        body.insert("data".to_owned(), self.handle(request.query, &vars));
        Ok(body)
    }
}

fn operation(query: &str) -> &'static str {
    [
        (queries::LIST_PAGES, "list"),
        (queries::GET_PAGE, "single"),
        (queries::GET_PAGE_BY_PATH, "singleByPath"),
        (queries::SEARCH_PAGES, "search"),
        (queries::CREATE_PAGE, "create"),
        (queries::UPDATE_PAGE, "update"),
        (queries::DELETE_PAGE, "delete"),
        (queries::RENDER_PAGE, "render"),
        (queries::LIST_TAGS, "tags"),
    ]
    .into_iter()
    .find(|(doc, _)| *doc == query)
    .map_or("unknown", |(_, op)| op)
}

fn str_var<'a>(vars: &'a Value, key: &str) -> &'a str {
    vars[key].as_str().unwrap_or_default()
}

fn tags_var(vars: &Value) -> Vec<PageTag> {
    vars["tags"]
        .as_array()
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .map(|t| PageTag {
                    tag: t.to_owned(),
                    title: None,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn result(succeeded: bool) -> Value {
    if succeeded {
        json!({
            "succeeded": true,
            "errorCode": 0,
            "slug": "success",
            "message": "Operation succeeded."
        })
    } else {
        json!({
            "succeeded": false,
            "errorCode": 6003,
            "slug": "PageNotFound",
            "message": "This page does not exist."
        })
    }
}
