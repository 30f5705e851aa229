use async_graphql::{Context, Object, Result, ID};
use leaderboard::store::{gallery, sail, tournament};

use super::{
    parse_id,
    scalars::{Date, DirectionArg, OrderByArg, SailFilterArg},
    types::{EventNode, FileGroupNode, SailNode, TournamentNode},
    ApiResult, State,
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A tournament by id, or the one with the greatest date when `latest` is set.
    async fn tournament(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        latest: Option<bool>,
    ) -> Result<Option<TournamentNode>> {
        let state = ctx.data::<State>()?;
        let tournament = tournament::find(&state.db, parse_id(id), latest.unwrap_or(false))
            .await
            .api()?;

        Ok(tournament.map(TournamentNode))
    }

    async fn tournaments(
        &self,
        ctx: &Context<'_>,
        order_by: Option<OrderByArg>,
        direction: Option<DirectionArg>,
    ) -> Result<Vec<TournamentNode>> {
        let state = ctx.data::<State>()?;
        let tournaments = tournament::list(
            &state.db,
            order_by.unwrap_or(OrderByArg::Date).into(),
            direction.unwrap_or(DirectionArg::Desc).into(),
        )
        .await
        .api()?;

        Ok(tournaments.into_iter().map(TournamentNode).collect())
    }

    async fn event(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<EventNode>> {
        let state = ctx.data::<State>()?;
        let event = gallery::event(&state.db, parse_id(id)).await.api()?;

        Ok(event.map(EventNode))
    }

    async fn events(
        &self,
        ctx: &Context<'_>,
        order_by: Option<OrderByArg>,
        direction: Option<DirectionArg>,
    ) -> Result<Vec<EventNode>> {
        let state = ctx.data::<State>()?;
        let events = gallery::events(
            &state.db,
            order_by.unwrap_or(OrderByArg::Position).into(),
            direction.unwrap_or(DirectionArg::Asc).into(),
        )
        .await
        .api()?;

        Ok(events.into_iter().map(EventNode).collect())
    }

    async fn file_group(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<FileGroupNode>> {
        let state = ctx.data::<State>()?;
        let group = gallery::file_group(&state.db, state.bucket.as_ref(), parse_id(id))
            .await
            .api()?;

        Ok(group.map(FileGroupNode))
    }

    async fn file_groups(
        &self,
        ctx: &Context<'_>,
        direction: Option<DirectionArg>,
    ) -> Result<Vec<FileGroupNode>> {
        let state = ctx.data::<State>()?;
        let groups = gallery::file_groups(
            &state.db,
            state.bucket.as_ref(),
            direction.unwrap_or(DirectionArg::Asc).into(),
        )
        .await
        .api()?;

        Ok(groups.into_iter().map(FileGroupNode).collect())
    }

    /// Sails between the start of `start`'s day and the end of `end`'s day.
    async fn sails(
        &self,
        ctx: &Context<'_>,
        start: Option<Date>,
        end: Option<Date>,
        direction: Option<DirectionArg>,
        filter_by: Option<SailFilterArg>,
    ) -> Result<Vec<SailNode>> {
        let state = ctx.data::<State>()?;
        let sails = sail::list(
            &state.db,
            start.map(|date| date.0),
            end.map(|date| date.0),
            direction.unwrap_or(DirectionArg::Desc).into(),
            filter_by.unwrap_or(SailFilterArg::Departure).into(),
        )
        .await
        .api()?;

        Ok(sails.into_iter().map(SailNode).collect())
    }
}
