use async_graphql::{Context, InputObject, Object, Result as GqlResult, SimpleObject};

use crate::modules::streams::core::ports::StoreError;
use crate::modules::streams::core::stream::{
    NewStream, Stream, StreamElement, StreamPatch, StreamQuery, StreamRef,
};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "StreamElement")]
pub struct GqlStreamElement {
    pub x: f64,
    pub y: f64,
    pub content: String,
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Stream")]
pub struct GqlStream {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub elements: Vec<GqlStreamElement>,
}

#[derive(InputObject, Clone)]
#[graphql(name = "StreamElementInput")]
pub struct GqlStreamElementInput {
    pub x: f64,
    pub y: f64,
    pub content: String,
}

impl From<StreamElement> for GqlStreamElement {
    fn from(e: StreamElement) -> Self {
        Self {
            x: e.x,
            y: e.y,
            content: e.content,
        }
    }
}

impl From<Stream> for GqlStream {
    fn from(s: Stream) -> Self {
        Self {
            id: s.id,
            width: s.width,
            height: s.height,
            elements: s.elements.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<GqlStreamElementInput> for StreamElement {
    fn from(e: GqlStreamElementInput) -> Self {
        Self {
            x: e.x,
            y: e.y,
            content: e.content,
        }
    }
}

fn gql_error(e: StoreError) -> async_graphql::Error {
    async_graphql::Error::new(e.to_string())
}

fn into_elements(elements: Vec<GqlStreamElementInput>) -> Vec<StreamElement> {
    elements.into_iter().map(Into::into).collect()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn stream(&self, context: &Context<'_>, id: String) -> GqlResult<Option<GqlStream>> {
        let state = context.data_unchecked::<AppState>();
        let found = state.store.find(&id).await.map_err(gql_error)?;
        Ok(found.map(Into::into))
    }

    async fn streams(&self, context: &Context<'_>) -> GqlResult<Vec<GqlStream>> {
        let state = context.data_unchecked::<AppState>();
        let all = state.store.array().await.map_err(gql_error)?;
        Ok(all.into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_stream(
        &self,
        context: &Context<'_>,
        width: f64,
        height: f64,
        elements: Option<Vec<GqlStreamElementInput>>,
    ) -> GqlResult<GqlStream> {
        let state = context.data_unchecked::<AppState>();
        let created = state
            .store
            .create(NewStream {
                width,
                height,
                elements: into_elements(elements.unwrap_or_default()),
            })
            .await
            .map_err(gql_error)?;
        Ok(created.into())
    }

    /// Returns how many streams matched the id.
    async fn patch_stream(
        &self,
        context: &Context<'_>,
        id: String,
        width: Option<f64>,
        height: Option<f64>,
        elements: Option<Vec<GqlStreamElementInput>>,
    ) -> GqlResult<u64> {
        let state = context.data_unchecked::<AppState>();
        let update = StreamPatch {
            id: None,
            width,
            height,
            elements: elements.map(into_elements),
        };
        state
            .store
            .patch(StreamQuery::by_id(id), update)
            .await
            .map(|matched| matched as u64)
            .map_err(gql_error)
    }

    async fn delete_stream(&self, context: &Context<'_>, id: String) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .store
            .delete(StreamRef::Id(&id))
            .await
            .map_err(gql_error)?;
        Ok(true)
    }
}
