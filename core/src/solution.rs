use std::future::Future;

use async_trait::async_trait;

use crate::answer::Answer;

/// A solver for one part of a day's puzzle.
///
/// An `Err` returned from [`Solution::solve`] is a fault of the solution itself.
/// It is never turned into a failed test; it aborts the whole run.
#[async_trait]
pub trait Solution: Send + Sync {
    async fn solve(&self, input: &str) -> anyhow::Result<Answer>;
}

pub struct FnSolution<F>(F);

pub struct TryFnSolution<F>(F);

pub struct AsyncFnSolution<F>(F);

/// Wraps an infallible synchronous function.
pub fn from_fn<F, R>(f: F) -> FnSolution<F>
where
    F: Fn(&str) -> R + Send + Sync,
    R: Into<Answer> + 'static,
{
    FnSolution(f)
}

/// Wraps a synchronous function whose `Err` is a solution fault.
pub fn try_from_fn<F, R, E>(f: F) -> TryFnSolution<F>
where
    F: Fn(&str) -> Result<R, E> + Send + Sync,
    R: Into<Answer> + 'static,
    E: Into<anyhow::Error> + 'static,
{
    TryFnSolution(f)
}

/// Wraps an asynchronous function. The input is handed over as an owned `String`.
pub fn from_async_fn<F, Fut, R>(f: F) -> AsyncFnSolution<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<R>> + Send + 'static,
    R: Into<Answer> + 'static,
{
    AsyncFnSolution(f)
}

#[async_trait]
impl<F, R> Solution for FnSolution<F>
where
    F: Fn(&str) -> R + Send + Sync,
    R: Into<Answer> + 'static,
{
    async fn solve(&self, input: &str) -> anyhow::Result<Answer> {
        Ok((self.0)(input).into())
    }
}

#[async_trait]
impl<F, R, E> Solution for TryFnSolution<F>
where
    F: Fn(&str) -> Result<R, E> + Send + Sync,
    R: Into<Answer> + 'static,
    E: Into<anyhow::Error> + 'static,
{
    async fn solve(&self, input: &str) -> anyhow::Result<Answer> {
        (self.0)(input).map(Into::into).map_err(Into::into)
    }
}

#[async_trait]
impl<F, Fut, R> Solution for AsyncFnSolution<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<R>> + Send + 'static,
    R: Into<Answer> + 'static,
{
    async fn solve(&self, input: &str) -> anyhow::Result<Answer> {
        (self.0)(input.to_owned()).await.map(Into::into)
    }
}
