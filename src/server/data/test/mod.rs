mod question;
mod survey;
mod user;
