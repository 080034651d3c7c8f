//! GraphQL documents for every remote operation.

pub const LIST_PAGES: &str = r"
query ($limit: Int) {
    pages {
        list(limit: $limit, orderBy: PATH) {
            id
            path
            locale
            title
            description
            updatedAt
            createdAt
        }
    }
}";

pub const GET_PAGE: &str = r"
query ($id: Int!) {
    pages {
        single(id: $id) {
            id
            path
            locale
            title
            description
            content
            contentType
            createdAt
            updatedAt
            tags {
                tag
                title
            }
        }
    }
}";

pub const GET_PAGE_BY_PATH: &str = r"
query ($path: String!, $locale: String!) {
    pages {
        singleByPath(path: $path, locale: $locale) {
            id
            path
            locale
            title
            description
            content
            contentType
            createdAt
            updatedAt
            tags {
                tag
                title
            }
        }
    }
}";

pub const SEARCH_PAGES: &str = r"
query ($query: String!) {
    pages {
        search(query: $query) {
            results {
                id
                title
                description
                path
                locale
            }
            suggestions
            totalHits
        }
    }
}";

pub const CREATE_PAGE: &str = r"
mutation (
    $path: String!
    $title: String!
    $content: String!
    $description: String!
    $editor: String!
    $locale: String!
    $tags: [String]!
    $isPublished: Boolean!
    $isPrivate: Boolean!
) {
    pages {
        create(
            path: $path
            title: $title
            content: $content
            description: $description
            editor: $editor
            locale: $locale
            tags: $tags
            isPublished: $isPublished
            isPrivate: $isPrivate
        ) {
            responseResult {
                succeeded
                errorCode
                slug
                message
            }
            page {
                id
                path
                title
            }
        }
    }
}";

pub const UPDATE_PAGE: &str = r"
mutation (
    $id: Int!
    $content: String!
    $title: String!
    $description: String!
    $tags: [String]!
) {
    pages {
        update(
            id: $id
            content: $content
            title: $title
            description: $description
            tags: $tags
        ) {
            responseResult {
                succeeded
                errorCode
                slug
                message
            }
            page {
                id
                path
                title
                updatedAt
            }
        }
    }
}";

pub const DELETE_PAGE: &str = r"
mutation ($id: Int!) {
    pages {
        delete(id: $id) {
            responseResult {
                succeeded
                errorCode
                slug
                message
            }
        }
    }
}";

pub const RENDER_PAGE: &str = r"
mutation ($id: Int!) {
    pages {
        render(id: $id) {
            responseResult {
                succeeded
                errorCode
                slug
                message
            }
        }
    }
}";

pub const LIST_TAGS: &str = r"
query {
    pages {
        tags {
            id
            tag
            title
            createdAt
            updatedAt
        }
    }
}";
