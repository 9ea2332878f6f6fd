mod helpers;
mod rest_client;
