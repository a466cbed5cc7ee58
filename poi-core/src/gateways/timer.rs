use std::time::Duration;

use async_trait::async_trait;

#[async_trait(?Send)]
pub trait Delay {
    async fn delay(&self, duration: Duration);
}
