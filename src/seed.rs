//! Seed defaults
//!
//! Built-in fallback snapshots used to populate a collection on first run,
//! and to heal one whose stored text no longer parses. Whichever component
//! reads a collection first writes the seed back so later readers see it.

use std::collections::BTreeMap;

use crate::models::{
    AboutContent, ContentImages, Event, HomepageContent, LanguageContent, Leader, SiteContent,
    User, UserRole,
};

/// Default events shown until an admin edits the collection
pub fn default_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".into(),
            title: "Men's Day".into(),
            date: "May 4, 2025".into(),
            description: "Join us for a special Men's Day service with Bishop Dr. Rogathe Z. Swai. The theme is 'Men of Faith, Men of Action'.".into(),
            image: "https://images.unsplash.com/photo-1523803326055-13445f272bf7?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80".into(),
        },
        Event {
            id: "2".into(),
            title: "Youth Conference".into(),
            date: "June 15, 2025".into(),
            description: "Annual youth conference focused on empowering the next generation with practical faith for today's challenges.".into(),
            image: "https://images.unsplash.com/photo-1523803326055-13445f272bf7?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80".into(),
        },
        Event {
            id: "3".into(),
            title: "Women's Prayer Meeting".into(),
            date: "July 2, 2025".into(),
            description: "Monthly women's prayer meeting focusing on family and community. Special guest speaker from Nairobi.".into(),
            image: "https://images.unsplash.com/photo-1529070538774-1843cb3265df?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80".into(),
        },
    ]
}

/// Default leadership profiles
pub fn default_leaders() -> Vec<Leader> {
    vec![
        Leader {
            id: "1".into(),
            name: "Bishop Dr. Rogathe Z. Swai".into(),
            role: "Senior Pastor".into(),
            bio: Some("Bishop Dr. Rogathe has been serving as our Senior Pastor since 2005. With over 30 years in ministry, he is passionate about spreading the Gospel and leading the church with wisdom and compassion.".into()),
            image: "https://images.unsplash.com/photo-1548449112-96a38a643324?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80".into(),
        },
        Leader {
            id: "2".into(),
            name: "Rev. Mary Johnson".into(),
            role: "Assistant Pastor".into(),
            bio: Some("Rev. Mary oversees our youth and women ministries. She joined the church in 2012 and has been instrumental in community outreach programs.".into()),
            image: "https://images.unsplash.com/photo-1594744803329-e58b31de8bf5?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80".into(),
        },
        Leader {
            id: "3".into(),
            name: "Deacon James Wilson".into(),
            role: "Head Deacon".into(),
            bio: Some("Deacon James coordinates our welfare and service ministries. He has been a faithful member of the church since its founding.".into()),
            image: "https://images.unsplash.com/photo-1568602471122-7832951cc4c5?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80".into(),
        },
    ]
}

/// The single distinguished super-admin account created on first run.
/// Credentials are placeholders meant to be changed by the operator.
pub fn default_users() -> Vec<User> {
    vec![User {
        id: "1".into(),
        email: "admin@example.com".into(),
        name: "Admin".into(),
        role: UserRole::SuperAdmin,
        password: "1234".into(),
    }]
}

/// Default bilingual page text
pub fn default_content() -> SiteContent {
    SiteContent {
        english: LanguageContent {
            homepage: HomepageContent {
                hero_title: "Welcome to Kinondoni Revival Church".into(),
                hero_description: "Transforming lives through the power of God's word".into(),
                welcome_message: "We are delighted to welcome you to Kinondoni Revival Church. We are a community of believers committed to sharing the love of Christ and making disciples.".into(),
                service_times_title: "Service Times".into(),
            },
            about: AboutContent {
                church_history_title: "Our History".into(),
                church_history_content: "Founded in 1990, Kinondoni Revival Church has been serving the community for over three decades, bringing the message of hope and salvation.".into(),
                vision_title: "Our Vision".into(),
                vision_content: "To raise disciples who will transform their communities through the power of the Gospel.".into(),
                mission_title: "Our Mission".into(),
                mission_content: "To equip believers with the Word of God and empower them to fulfill their God-given purpose.".into(),
            },
        },
        swahili: LanguageContent {
            homepage: HomepageContent {
                hero_title: "Karibu Kanisa la Ufufuo la Kinondoni".into(),
                hero_description: "Kubadilisha maisha kupitia nguvu ya neno la Mungu".into(),
                welcome_message: "Tunafuraha kukukaribisha katika Kanisa la Ufufuo la Kinondoni. Sisi ni jamii ya waumini waliojitoa kushiriki upendo wa Kristo na kutengeneza wanafunzi.".into(),
                service_times_title: "Nyakati za Ibada".into(),
            },
            about: AboutContent {
                church_history_title: "Historia Yetu".into(),
                church_history_content: "Ikianzishwa mwaka 1990, Kanisa la Ufufuo la Kinondoni limekuwa likihudumia jamii kwa zaidi ya miaka thelathini, likiwafikishia ujumbe wa tumaini na wokovu.".into(),
                vision_title: "Maono Yetu".into(),
                vision_content: "Kuinua wanafunzi watakaobadilisha jamii zao kupitia nguvu ya Injili.".into(),
                mission_title: "Dhamira Yetu".into(),
                mission_content: "Kuwatayarisha waumini kwa Neno la Mungu na kuwawezesha kutimiza malengo yao yaliyotolewa na Mungu.".into(),
            },
        },
    }
}

/// Default page image slots
pub fn default_images() -> ContentImages {
    let mut homepage = BTreeMap::new();
    homepage.insert(
        "hero".to_string(),
        "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80".to_string(),
    );
    homepage.insert(
        "about".to_string(),
        "https://images.unsplash.com/photo-1438032005730-c779502df39b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80".to_string(),
    );

    let mut about = BTreeMap::new();
    about.insert(
        "history".to_string(),
        "https://images.unsplash.com/photo-1438032005730-c779502df39b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80".to_string(),
    );
    about.insert(
        "vision".to_string(),
        "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80".to_string(),
    );

    ContentImages { homepage, about }
}
