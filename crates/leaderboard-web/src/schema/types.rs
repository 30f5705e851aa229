use async_graphql::{Context, Object, Result, ID};
use leaderboard::{
    store::{boat, category, entry, fisherman, gallery},
    Boat, Category, Entry, Event, File, FileGroup, Fisherman, Sail, Tournament,
};

use super::{
    scalars::{CategoryType, Date, DirectionArg, OrderByArg},
    ApiResult, State,
};

pub struct TournamentNode(pub Tournament);

#[Object(name = "Tournament")]
impl TournamentNode {
    async fn id(&self) -> ID {
        self.0.id.into()
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn slug(&self) -> &str {
        &self.0.slug
    }

    async fn position(&self) -> i32 {
        self.0.position
    }

    async fn date(&self) -> Date {
        self.0.date.into()
    }

    async fn created_at(&self) -> Date {
        self.0.created_at.into()
    }

    async fn categories(&self, ctx: &Context<'_>) -> Result<Vec<CategoryNode>> {
        let state = ctx.data::<State>()?;
        let categories = category::list_for_tournament(&state.db, self.0.id).await.api()?;

        Ok(categories.into_iter().map(CategoryNode).collect())
    }

    /// Visible entries, best catch first.
    async fn entries(&self, ctx: &Context<'_>) -> Result<Vec<EntryNode>> {
        let state = ctx.data::<State>()?;
        let entries = entry::list_for_tournament(&state.db, self.0.id).await.api()?;

        Ok(entries.into_iter().map(EntryNode).collect())
    }

    async fn fishermans(&self, ctx: &Context<'_>) -> Result<Vec<FishermanNode>> {
        let state = ctx.data::<State>()?;
        let fishermen = fisherman::list_for_tournament(&state.db, self.0.id).await.api()?;

        Ok(fishermen.into_iter().map(FishermanNode).collect())
    }

    async fn boats(&self, ctx: &Context<'_>) -> Result<Vec<BoatNode>> {
        let state = ctx.data::<State>()?;
        let boats = boat::list_for_tournament(&state.db, self.0.id).await.api()?;

        Ok(boats.into_iter().map(BoatNode).collect())
    }
}

pub struct CategoryNode(pub Category);

#[Object(name = "Category")]
impl CategoryNode {
    async fn id(&self) -> ID {
        self.0.id.into()
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    #[graphql(name = "type")]
    async fn scoring(&self) -> CategoryType {
        self.0.scoring.into()
    }

    async fn limit(&self) -> u32 {
        self.0.limit
    }

    async fn created_at(&self) -> Date {
        self.0.created_at.into()
    }

    /// The ranked leaderboard. Points categories return one entry per
    /// fisherman carrying their total.
    async fn entries(
        &self,
        ctx: &Context<'_>,
        ignore_limit: Option<bool>,
    ) -> Result<Vec<EntryNode>> {
        let state = ctx.data::<State>()?;
        let entries = entry::leaderboard(&state.db, &self.0, ignore_limit.unwrap_or(false))
            .await
            .api()?;

        Ok(entries.into_iter().map(EntryNode).collect())
    }
}

pub struct EntryNode(pub Entry);

#[Object(name = "Entry")]
impl EntryNode {
    async fn id(&self) -> ID {
        self.0.id.into()
    }

    async fn value(&self) -> f64 {
        self.0.value
    }

    async fn date(&self) -> Date {
        self.0.date.into()
    }

    async fn witness(&self) -> Option<&str> {
        self.0.witness.as_deref()
    }

    async fn fisherman(&self, ctx: &Context<'_>) -> Result<Option<FishermanNode>> {
        let state = ctx.data::<State>()?;
        let fisherman = fisherman::get(&state.db, self.0.fisherman_id).await.api()?;

        Ok(fisherman.map(FishermanNode))
    }

    async fn category(&self, ctx: &Context<'_>) -> Result<Option<CategoryNode>> {
        let state = ctx.data::<State>()?;
        let category = category::get(&state.db, self.0.category_id).await.api()?;

        Ok(category.map(CategoryNode))
    }

    async fn boat(&self, ctx: &Context<'_>) -> Result<Option<BoatNode>> {
        let state = ctx.data::<State>()?;
        let boat = boat::get(&state.db, self.0.boat_id).await.api()?;

        Ok(boat.map(BoatNode))
    }
}

pub struct FishermanNode(pub Fisherman);

#[Object(name = "Fisherman")]
impl FishermanNode {
    async fn id(&self) -> ID {
        self.0.id.into()
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn email(&self) -> Option<&str> {
        self.0.email.as_deref()
    }

    async fn is_enabled(&self) -> bool {
        self.0.is_enabled
    }
}

pub struct BoatNode(pub Boat);

#[Object(name = "Boat")]
impl BoatNode {
    async fn id(&self) -> ID {
        self.0.id.into()
    }

    async fn name(&self) -> &str {
        &self.0.name
    }
}

pub struct EventNode(pub Event);

#[Object(name = "Event")]
impl EventNode {
    async fn id(&self) -> ID {
        self.0.id.into()
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn position(&self) -> i32 {
        self.0.position
    }

    async fn date(&self) -> Date {
        self.0.date.into()
    }

    async fn file_groups(
        &self,
        ctx: &Context<'_>,
        order_by: Option<OrderByArg>,
        direction: Option<DirectionArg>,
    ) -> Result<Vec<FileGroupNode>> {
        let state = ctx.data::<State>()?;
        let groups = gallery::file_groups_for_event(
            &state.db,
            state.bucket.as_ref(),
            self.0.id,
            order_by.unwrap_or(OrderByArg::Position).into(),
            direction.unwrap_or(DirectionArg::Asc).into(),
        )
        .await
        .api()?;

        Ok(groups.into_iter().map(FileGroupNode).collect())
    }
}

pub struct FileGroupNode(pub FileGroup);

#[Object(name = "FileGroup")]
impl FileGroupNode {
    async fn id(&self) -> ID {
        self.0.id.into()
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn directory(&self) -> &str {
        &self.0.directory
    }

    async fn position(&self) -> i32 {
        self.0.position
    }

    async fn date(&self) -> Date {
        self.0.date.into()
    }

    async fn files(&self) -> Vec<FileNode> {
        self.0.files.iter().cloned().map(FileNode).collect()
    }
}

pub struct FileNode(pub File);

#[Object(name = "File")]
impl FileNode {
    async fn id(&self) -> ID {
        self.0.id.as_str().into()
    }

    async fn key(&self) -> &str {
        &self.0.key
    }

    async fn version(&self) -> Option<&str> {
        self.0.version.as_deref()
    }

    async fn size(&self) -> u64 {
        self.0.size
    }

    async fn uploaded(&self) -> Date {
        self.0.uploaded.into()
    }

    async fn url(&self) -> &str {
        &self.0.url
    }
}

pub struct SailNode(pub Sail);

#[Object(name = "Sail")]
impl SailNode {
    async fn id(&self) -> ID {
        self.0.id.into()
    }

    async fn boat(&self) -> &str {
        &self.0.boat
    }

    async fn captain(&self) -> &str {
        &self.0.captain
    }

    async fn crew(&self) -> i32 {
        self.0.crew
    }

    async fn destination(&self) -> &str {
        &self.0.destination
    }

    async fn departure(&self) -> Date {
        self.0.departure.into()
    }

    async fn arrival(&self) -> Date {
        self.0.arrival.into()
    }

    async fn created_at(&self) -> Date {
        self.0.created_at.into()
    }
}
