/*
[INPUT]:  Subscription metadata and API credentials
[OUTPUT]: Signed subscription tokens for real-time sessions
[POS]:    Auth layer - client-side authentication for channel subscriptions
[UPDATE]: When subscription signing or token format changes
*/

pub mod subscription;
