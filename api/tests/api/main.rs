mod daily_tips;
mod helpers;
mod login;
mod subscriptions;
