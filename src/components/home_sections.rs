//! Home Page Sections

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::api::{self, PostQuery};
use crate::content::{format_date, strip_tags};
use crate::context::use_app;
use crate::models::Post;

/// A ministry department card
struct Department {
    logo: &'static str,
    title: &'static str,
    text: &'static str,
    link: &'static str,
}

const DEPARTMENTS: [Department; 5] = [
    Department {
        logo: "images/mpf_logo.png",
        title: "မြန်မာနိုင်ငံရဲတပ်ဖွဲ့",
        text: "ပြည်တွင်းလုံခြုံရေး၊ တရားဥပဒေစိုးမိုးရေး၊ မူးယစ်ဆေးဝါးအန္တရာယ်တားဆီးကာကွယ်ရေး...",
        link: "https://policeforce.gov.mm/",
    },
    Department {
        logo: "images/gad_logo.jpg",
        title: "အထွေထွေအုပ်ချုပ်ရေးဦးစီးဌာန",
        text: "တရားဥပဒေစိုးမိုးရေး၊ ရပ်ရွာအေးချမ်းသာယာရေး၊ ဒေသဖွံ့ဖြိုးရေး....",
        link: "https://gad.gov.mm/",
    },
    Department {
        logo: "images/bsi_logo.jpg",
        title: "အထူးစုံစမ်းစစ်ဆေးရေးဦးစီးဌာန",
        text: "ဖြစ်ရပ်မှန်ပေါ်ပေါက်အောင် စုံစမ်းဖော်ထုတ်၍ တာဝန်ရှိသူများအား ပြစ်မှုကြောင်းအရလည်းကောင်း....",
        link: "https://www.bsi.gov.mm",
    },
    Department {
        logo: "images/pd_logo.png",
        title: "အကျဉ်းဦးစီးဌာန",
        text: "လုံခြုံစွာထိန်းသိမ်းရေး၊ အကျင့် စာရိတ္တပြုပြင်ပြောင်းလဲရေး၊ ကုထုတ်လုပ်မှုလုပ်ငန်းများ လေ့ကျင့်သင်ကြားရေး...",
        link: "https://prisonsdepartment.gov.mm/",
    },
    Department {
        logo: "images/fsd_logo.png",
        title: "မီးသတ်ဦးစီးဌာန",
        text: "မီးသတ်ဦးစီးဌာနသည် ပြည်သူလူထု၏ အသက်အိုးအိမ်ပစ္စည်းများ၊ နိုင်ငံတော်အတွင်းရှိကုန်ထုတ်အရင်းအနှီးများကို မီးဘေးအန္တရာယ်မှ...",
        link: "https://www.fsd.gov.mm",
    },
];

/// Fetch one page of posts into `set`; failures only log
fn load_posts(query: PostQuery, take: usize, set: WriteSignal<Vec<Post>>) {
    let api = use_app().api();
    spawn_local(async move {
        match api::list_posts(&api, &query).await {
            Ok(page) => set.set(page.data.into_iter().take(take).collect()),
            Err(e) => warn!("[HOME] failed to load posts {:?}: {}", query, e),
        }
    });
}

#[component]
pub fn HeroBanner() -> impl IntoView {
    view! {
        <div class="hero-banner">
            <img src="/images/moha-office.jpg" alt="Hero Banner"/>
        </div>
    }
}

#[component]
pub fn Highlights() -> impl IntoView {
    view! {
        <section class="highlights">
            <h2>"ပြည်ထဲရေးဝန်ကြီးဌာန"</h2>
            <p class="highlights-lead">
                "နိုင်ငံတော်လုံခြုံရေး၊ တရားဥပဒေစိုးမိုးရေး၊ ရပ်ရွာအေးချမ်းသာယာရေး၊ ပြည်သူ့အကျိုးပြုဆောင်ရွက်ရေး ဟူသော ရည်မှန်းချက်တာဝန်များကို အကောင်အထည်ဖော် ဆောင်ရွက်လျက်ရှိပါသည်။"
            </p>
            <div class="highlight-cards">
                {DEPARTMENTS
                    .iter()
                    .map(|d| view! {
                        <a class="highlight-card" href=d.link target="_blank" rel="noopener noreferrer">
                            <div class="highlight-icon">
                                <img src=d.logo alt="logoimage"/>
                            </div>
                            <h3>{d.title}</h3>
                            <p>{d.text}</p>
                            <span class="learn-more">"Learn More"</span>
                        </a>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn NewsAndUpdates() -> impl IntoView {
    let app = use_app();
    let (posts, set_posts) = signal(Vec::<Post>::new());
    load_posts(PostQuery::default(), 4, set_posts);

    view! {
        <section class="news">
            <h2>"နောက်ဆုံးရသတင်းများ"</h2>
            <p class="news-lead">
                "ပြည်ထဲရေး၀န်ကြီးဌာန၊ ပြည်ထောင်စု၀န်ကြီးရုံးနှင့် ကွပ်ကဲမှုအောက်ရှိ တပ်ဖွဲ့/ဦးစီးဌာနများ၏ လှုပ်ရှားမှုသတင်းများအားဖော်ပြခြင်း"
            </p>
            <div class="news-grid">
                <For
                    each=move || posts.get()
                    key=|post| post.id
                    children=move |post| {
                        let thumb = post.thumbnail().map(|p| app.asset(p));
                        let intro = strip_tags(post.introtext.as_deref().unwrap_or_default());
                        view! {
                            <div class="news-card">
                                {thumb.map(|src| view! { <img src=src alt=post.title.clone()/> })}
                                <div class="news-card-body">
                                    <h3>{post.title.clone()}</h3>
                                    <p>{intro}</p>
                                    <a href=format!("/posts/{}", post.id)>"Read More →"</a>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
            <a class="btn-primary" href="/media">"View All News"</a>
        </section>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    let app = use_app();
    let (announcements, set_announcements) = signal(Vec::<Post>::new());
    let (videos, set_videos) = signal(Vec::<Post>::new());
    load_posts(PostQuery::default().with_category("announcements").with_limit(4), 4, set_announcements);
    load_posts(PostQuery::default().with_category("videos").with_limit(4), 4, set_videos);

    view! {
        <section class="features">
            <h2>"Our Work"</h2>
            <div class="features-columns">
                <div class="features-column">
                    <h3>"ထုတ်ပြန်ကြေငြာချက်များ"</h3>
                    <ul class="announcement-list">
                        <For
                            each=move || announcements.get()
                            key=|post| post.id
                            children=move |post| {
                                let thumb = post.thumbnail().map(|p| app.asset(p));
                                let date = post.created_at.as_deref().map(format_date).unwrap_or_default();
                                view! {
                                    <li>
                                        {thumb.map(|src| view! { <img class="round-thumb" src=src alt=post.title.clone()/> })}
                                        <a href=format!("/posts/{}", post.id)>{post.title.clone()}</a>
                                        <span class="date">{date}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <a class="btn-primary" href="/media?category=announcements">"View More"</a>
                </div>
                <div class="features-column">
                    <h3>"ဗွီဒီယိုမှတ်တမ်းများ"</h3>
                    <div class="video-cards">
                        <For
                            each=move || videos.get()
                            key=|post| post.id
                            children=move |post| {
                                let thumb = post.thumbnail().map(|p| app.asset(p));
                                let intro = strip_tags(post.introtext.as_deref().unwrap_or_default());
                                view! {
                                    <div class="video-card">
                                        {thumb.map(|src| view! {
                                            <div class="video-thumb">
                                                <img src=src alt=post.title.clone()/>
                                                <div class="play-overlay">"▶"</div>
                                            </div>
                                        })}
                                        <h3>{post.title.clone()}</h3>
                                        <p>{intro}</p>
                                    </div>
                                }
                            }
                        />
                    </div>
                    <a class="btn-primary" href="/media?category=videos">"View More"</a>
                </div>
            </div>
        </section>
    }
}
