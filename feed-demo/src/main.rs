use feed_model::{extract_hashtags, Reaction};
use feed_seed::JsonContent;
use feed_state::board::MessageBoard;
use feed_state::comments::SortMode;
use feed_state::inbox::NotificationInbox;
use feed_state::notify::{MemoryClipboard, Notify};
use feed_state::people::SuggestedPeople;
use feed_state::{ContentProvider, FeedPage, FilterState};
use itertools::Itertools;

struct StdoutNotify;

impl Notify for StdoutNotify {
    fn notify(&self, title: &str, description: &str) {
        println!("  [toast] {}: {}", title, description);
    }
}

fn main() {
    let notify = StdoutNotify;
    let content = JsonContent::new().unwrap();
    let mut page = FeedPage::from_provider(&content);

    println!("feed: {} publicaciones", page.len());

    let trending: Vec<String> = page
        .cards()
        .iter()
        .flat_map(|card| extract_hashtags(&card.post().description))
        .unique()
        .collect();
    println!("tendencias: #{}", trending.join(" #"));

    page.select_filter(FilterState::Proyecto);
    println!("{}", page.result_banner().unwrap());
    for card in page.visible() {
        println!("  - {}", card.post().title);
    }
    page.select_filter(FilterState::Proyecto);

    // interact with the mentoring idea
    let card = page.card_mut(2).unwrap();
    println!("\n{} ({} me gusta)", card.post().title, card.like_count());
    card.react(Reaction::Interesting, &notify);
    card.join(&notify);
    card.add_comment("¿Cuándo arrancan?", &notify);
    println!("comentarios por relevancia:");
    for comment in card.sorted_comments(SortMode::Relevant) {
        println!("  {} ({} me gusta): {}", comment.author.name, comment.likes, comment.content);
    }

    let clipboard = MemoryClipboard::new();
    card.copy_text(&clipboard, &notify);

    let mut board = MessageBoard::new(content.messages());
    board.send("¡Yo me apunto al hackathon!");
    println!("\nmensajes: {}", board.len());

    let inbox = NotificationInbox::new(content.notifications());
    println!("notificaciones sin leer: {}", inbox.unread_count());

    let mut people = SuggestedPeople::new(content.suggested_users());
    people.follow("1", &notify);

    println!("Done!")
}
