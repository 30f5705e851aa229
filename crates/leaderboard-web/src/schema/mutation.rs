use async_graphql::{Context, InputObject, Object, Result, ID};
use leaderboard::store::{
    boat::{self, BoatChanges, NewBoat},
    category::{self, CategoryChanges, NewCategory},
    entry::{self, EntryChanges, NewEntry},
    fisherman::{self, FishermanChanges, NewFisherman},
    sail::{self, NewSail},
    tournament::{self, NewTournament, TournamentChanges},
};

use super::{
    parse_id,
    scalars::{CategoryType, Date},
    types::{BoatNode, CategoryNode, EntryNode, FishermanNode, SailNode, TournamentNode},
    ApiResult, State,
};

#[derive(InputObject)]
pub struct TournamentInput {
    id: Option<ID>,
    name: Option<String>,
    slug: Option<String>,
    position: Option<i32>,
    date: Option<Date>,
}

#[derive(InputObject)]
pub struct CategoryInput {
    id: Option<ID>,
    name: Option<String>,
    #[graphql(name = "type")]
    kind: Option<CategoryType>,
    limit: Option<i32>,
}

#[derive(InputObject)]
pub struct FishermanInput {
    id: Option<ID>,
    name: Option<String>,
    email: Option<String>,
    is_enabled: Option<bool>,
}

#[derive(InputObject)]
pub struct BoatInput {
    id: Option<ID>,
    name: Option<String>,
}

#[derive(InputObject)]
pub struct EntryInput {
    id: Option<ID>,
    category_id: Option<ID>,
    fisherman_id: Option<ID>,
    boat_id: Option<ID>,
    value: Option<f64>,
    witness: Option<String>,
    date: Option<Date>,
}

#[derive(InputObject)]
pub struct SailInput {
    boat: Option<String>,
    captain: Option<String>,
    crew: Option<i32>,
    destination: Option<String>,
    departure: Option<Date>,
    arrival: Option<Date>,
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn tournament_create(
        &self,
        ctx: &Context<'_>,
        input: TournamentInput,
    ) -> Result<TournamentNode> {
        let state = ctx.data::<State>()?;
        let new = NewTournament {
            name: input.name,
            slug: input.slug,
            date: input.date.map(|date| date.0),
            position: input.position,
        };

        Ok(TournamentNode(tournament::create(&state.db, new).await.api()?))
    }

    async fn tournament_update(
        &self,
        ctx: &Context<'_>,
        input: TournamentInput,
    ) -> Result<TournamentNode> {
        let state = ctx.data::<State>()?;
        let changes = TournamentChanges {
            id: parse_id(input.id),
            name: input.name,
            slug: input.slug,
            date: input.date.map(|date| date.0),
            position: input.position,
        };

        Ok(TournamentNode(tournament::update(&state.db, changes).await.api()?))
    }

    async fn tournament_delete(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<ID>> {
        let state = ctx.data::<State>()?;
        let deleted = tournament::delete(&state.db, parse_id(id)).await.api()?;

        Ok(deleted.map(ID::from))
    }

    async fn category_create(
        &self,
        ctx: &Context<'_>,
        tournament_id: Option<ID>,
        input: CategoryInput,
    ) -> Result<CategoryNode> {
        let state = ctx.data::<State>()?;
        let new = NewCategory {
            tournament_id: parse_id(tournament_id),
            name: input.name,
            scoring: input.kind.map(Into::into),
            limit: input.limit,
        };

        Ok(CategoryNode(category::create(&state.db, new).await.api()?))
    }

    async fn category_update(&self, ctx: &Context<'_>, input: CategoryInput) -> Result<CategoryNode> {
        let state = ctx.data::<State>()?;
        let changes = CategoryChanges {
            id: parse_id(input.id),
            name: input.name,
            scoring: input.kind.map(Into::into),
            limit: input.limit,
        };

        Ok(CategoryNode(category::update(&state.db, changes).await.api()?))
    }

    async fn category_delete(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<ID>> {
        let state = ctx.data::<State>()?;
        let deleted = category::delete(&state.db, parse_id(id)).await.api()?;

        Ok(deleted.map(ID::from))
    }

    async fn fisherman_create(
        &self,
        ctx: &Context<'_>,
        tournament_id: Option<ID>,
        input: FishermanInput,
    ) -> Result<FishermanNode> {
        let state = ctx.data::<State>()?;
        let new = NewFisherman {
            tournament_id: parse_id(tournament_id),
            name: input.name,
            email: input.email,
            is_enabled: input.is_enabled,
        };

        Ok(FishermanNode(fisherman::create(&state.db, new).await.api()?))
    }

    async fn fisherman_update(
        &self,
        ctx: &Context<'_>,
        input: FishermanInput,
    ) -> Result<FishermanNode> {
        let state = ctx.data::<State>()?;
        let changes = FishermanChanges {
            id: parse_id(input.id),
            name: input.name,
            email: input.email,
            is_enabled: input.is_enabled,
        };

        Ok(FishermanNode(fisherman::update(&state.db, changes).await.api()?))
    }

    async fn fisherman_delete(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<ID>> {
        let state = ctx.data::<State>()?;
        let deleted = fisherman::delete(&state.db, parse_id(id)).await.api()?;

        Ok(deleted.map(ID::from))
    }

    async fn boat_create(
        &self,
        ctx: &Context<'_>,
        tournament_id: Option<ID>,
        input: BoatInput,
    ) -> Result<BoatNode> {
        let state = ctx.data::<State>()?;
        let new = NewBoat {
            tournament_id: parse_id(tournament_id),
            name: input.name,
        };

        Ok(BoatNode(boat::create(&state.db, new).await.api()?))
    }

    async fn boat_update(&self, ctx: &Context<'_>, input: BoatInput) -> Result<BoatNode> {
        let state = ctx.data::<State>()?;
        let changes = BoatChanges {
            id: parse_id(input.id),
            name: input.name,
        };

        Ok(BoatNode(boat::update(&state.db, changes).await.api()?))
    }

    async fn boat_delete(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<ID>> {
        let state = ctx.data::<State>()?;
        let deleted = boat::delete(&state.db, parse_id(id)).await.api()?;

        Ok(deleted.map(ID::from))
    }

    async fn entry_create(
        &self,
        ctx: &Context<'_>,
        tournament_id: Option<ID>,
        input: EntryInput,
    ) -> Result<EntryNode> {
        let state = ctx.data::<State>()?;
        let new = NewEntry {
            tournament_id: parse_id(tournament_id),
            category_id: parse_id(input.category_id),
            fisherman_id: parse_id(input.fisherman_id),
            boat_id: parse_id(input.boat_id),
            value: input.value,
            witness: input.witness,
            date: input.date.map(|date| date.0),
        };

        Ok(EntryNode(entry::create(&state.db, new).await.api()?))
    }

    async fn entry_update(&self, ctx: &Context<'_>, input: EntryInput) -> Result<EntryNode> {
        let state = ctx.data::<State>()?;
        let changes = EntryChanges {
            id: parse_id(input.id),
            category_id: parse_id(input.category_id),
            fisherman_id: parse_id(input.fisherman_id),
            boat_id: parse_id(input.boat_id),
            value: input.value,
            witness: input.witness,
            date: input.date.map(|date| date.0),
        };

        Ok(EntryNode(entry::update(&state.db, changes).await.api()?))
    }

    async fn entry_delete(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<ID>> {
        let state = ctx.data::<State>()?;
        let deleted = entry::delete(&state.db, parse_id(id)).await.api()?;

        Ok(deleted.map(ID::from))
    }

    async fn sail_create(&self, ctx: &Context<'_>, input: SailInput) -> Result<SailNode> {
        let state = ctx.data::<State>()?;
        let new = NewSail {
            boat: input.boat,
            captain: input.captain,
            crew: input.crew,
            destination: input.destination,
            departure: input.departure.map(|date| date.0),
            arrival: input.arrival.map(|date| date.0),
        };

        Ok(SailNode(sail::create(&state.db, new).await.api()?))
    }
}
