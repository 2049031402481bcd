//! Static site content. Everything the sections render comes out of these
//! tables, so a rebrand or copy change is an edit here, not a component
//! rewrite.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SiteInfo {
    pub name: &'static str,
    pub short_name: &'static str,
    pub tagline: &'static str,
    pub founded: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub hours: &'static str,
}

pub const SITE: SiteInfo = SiteInfo {
    name: "Nur Al-Ilm Islamic Academy",
    short_name: "Nur Al-Ilm",
    tagline: "Nurturing young minds through Islamic values and academic excellence since 2015.",
    founded: "2015",
    phone: "+1 (555) 123-4567",
    phone_href: "tel:+15551234567",
    email: "info@nuralilm.edu",
    address: "123 Education Lane, City, State 12345",
    hours: "Mon-Fri: 8:00 AM - 4:00 PM",
};

/// Context wrapper so sections read the brand from one initialization point.
#[derive(Clone, Copy, PartialEq)]
pub struct SiteCtx(pub &'static SiteInfo);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HeroSlide {
    pub badge: &'static str,
    pub title: &'static str,
    pub highlight: &'static str,
    pub subtitle: &'static str,
    pub background: &'static str,
}

pub const HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        badge: "Admissions Open 2025-26",
        title: "Nurturing Young Minds",
        highlight: "With Excellence",
        subtitle: "A holistic approach to K-5 education, blending Islamic values with modern academic standards.",
        background: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?w=1920&q=80",
    },
    HeroSlide {
        badge: "Faith & Future",
        title: "Building Tomorrow's",
        highlight: "Leaders Today",
        subtitle: "Empowering students with the character, knowledge, and confidence to change the world.",
        background: "https://images.unsplash.com/photo-1427504494785-3a9ca7044f45?w=1920&q=80",
    },
    HeroSlide {
        badge: "Discover Potential",
        title: "Where Learning Meets",
        highlight: "Higher Purpose",
        subtitle: "Creating a joyful, safe, and intellectually stimulating environment for every child.",
        background: "https://images.unsplash.com/photo-1497633762265-9d179a990aa6?w=1920&q=80",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat { value: "500+", label: "Happy Students" },
    HeroStat { value: "25+", label: "Expert Educators" },
    HeroStat { value: "100%", label: "Success Rate" },
];

/// Targets for the animated counters in the about section.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Stat {
    pub label: &'static str,
    pub value: u32,
    pub suffix: &'static str,
}

pub const ABOUT_STATS: &[Stat] = &[
    Stat { label: "Students", value: 1240, suffix: "+" },
    Stat { label: "Graduation Rate", value: 98, suffix: "%" },
    Stat { label: "Years Teaching", value: 12, suffix: "+" },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ValueCard {
    pub label: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

pub const ABOUT_VALUES: &[ValueCard] = &[
    ValueCard {
        label: "Faith-Based",
        description: "Integrative Islamic values in every lesson",
        accent: "emerald",
    },
    ValueCard {
        label: "Excellence",
        description: "Rigorous academics & critical thinking",
        accent: "blue",
    },
    ValueCard {
        label: "Community",
        description: "Strong partnership with families",
        accent: "orange",
    },
    ValueCard {
        label: "Growth",
        description: "Focus on whole-child development",
        accent: "violet",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Holistic Curriculum",
        accent: "blue",
        description: "Our comprehensive program balances Islamic studies with core academics (Math, Science, Language Arts) and enrichment activities like art and robotics.",
    },
    Feature {
        title: "Islamic Values",
        accent: "emerald",
        description: "We integrate Quranic teachings, character development, and moral education into daily learning, helping students develop strong ethical foundations.",
    },
    Feature {
        title: "Small Class Sizes",
        accent: "orange",
        description: "With a 12:1 student-teacher ratio, we ensure personalized attention and meaningful relationships that support each child's unique learning journey.",
    },
    Feature {
        title: "Experienced Educators",
        accent: "violet",
        description: "Our certified teachers combine professional expertise with genuine care, creating engaging lessons that inspire curiosity and critical thinking.",
    },
    Feature {
        title: "Modern Facilities",
        accent: "pink",
        description: "State-of-the-art classrooms, technology labs, library, and prayer spaces provide safe, inspiring environments where students can explore and create.",
    },
    Feature {
        title: "Safe & Nurturing",
        accent: "cyan",
        description: "We maintain rigorous safety protocols and foster an inclusive culture of respect, ensuring every child feels valued, supported, and empowered.",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Educator {
    pub name: &'static str,
    pub specialty: &'static str,
    pub image: &'static str,
    pub quote: &'static str,
    pub accent: &'static str,
}

pub const EDUCATORS: &[Educator] = &[
    Educator {
        name: "Dr. Amina Hassan",
        specialty: "Islamic Studies & Arabic",
        image: "https://images.unsplash.com/photo-1594744803329-e58b31de8bf5?w=500&h=500&fit=crop&crop=faces&q=80",
        quote: "Every child has the potential to be a light in this world. Our duty is to kindle that flame with knowledge and faith.",
        accent: "emerald",
    },
    Educator {
        name: "Mr. Ibrahim Ali",
        specialty: "Mathematics & Science",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=500&h=500&fit=crop&crop=faces&q=80",
        quote: "Learning is a journey of discovery. I strive to make every equation and experiment a moment of wonder.",
        accent: "blue",
    },
    Educator {
        name: "Sr. Fatima Ahmed",
        specialty: "Language Arts",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=500&h=500&fit=crop&crop=faces&q=80",
        quote: "Words have power to change hearts and minds. We empower students to find their voice and use it for good.",
        accent: "pink",
    },
    Educator {
        name: "Br. Omar Malik",
        specialty: "Social Studies",
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=500&h=500&fit=crop&crop=faces&q=80",
        quote: "Understanding our past is the key to shaping a just and prosperous future for our community.",
        accent: "orange",
    },
    Educator {
        name: "Sr. Aisha Khan",
        specialty: "Early Childhood Education",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=500&h=500&fit=crop&crop=faces&q=80",
        quote: "Nurturing young minds requires patience, love, and an environment where they feel safe to explore.",
        accent: "violet",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GradeFocus {
    pub grade: &'static str,
    pub focus: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Subject {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub accent: &'static str,
    pub overview: &'static str,
    pub outcomes: &'static [&'static str],
    pub curriculum: &'static [GradeFocus],
    pub materials: &'static [&'static str],
}

pub fn find_subject(id: &str) -> Option<&'static Subject> {
    SUBJECTS.iter().find(|s| s.id == id)
}

pub const SUBJECTS: &[Subject] = &[
    Subject {
        id: "islamic-studies",
        title: "Islamic Studies",
        description: "Quran, Hadith, and character development",
        image: "https://images.unsplash.com/photo-1609599006353-e629aaabfeae?w=600&h=400&fit=crop&q=80",
        accent: "emerald",
        overview: "Our Islamic Studies program provides students with a deep understanding of Islamic faith, values, and practices. Through engaging lessons in Quranic recitation, Hadith studies, and character development, we help students build a strong foundation in their deen.",
        outcomes: &[
            "Master proper Quranic recitation with Tajweed rules",
            "Understand the five pillars of Islam and their application",
            "Learn from the life of Prophet Muhammad (PBUH)",
            "Develop strong moral character and Islamic ethics",
            "Memorize essential Duas and Surahs",
            "Apply Islamic values in daily life situations",
        ],
        curriculum: &[
            GradeFocus { grade: "Kindergarten", focus: "Basic Islamic concepts, simple Duas, stories of Prophets" },
            GradeFocus { grade: "Grade 1-2", focus: "Quran reading basics, Wudu and Salah, Islamic manners" },
            GradeFocus { grade: "Grade 3-4", focus: "Advanced Tajweed, Hadith introduction, Islamic history" },
            GradeFocus { grade: "Grade 5", focus: "Deeper Quranic understanding, comprehensive Seerah study" },
        ],
        materials: &[
            "Age-appropriate Quran translations and Tafsir",
            "Interactive Islamic learning apps and games",
            "Authentic Hadith collections for children",
            "Character-building storybooks",
            "Prayer mats and learning aids",
        ],
    },
    Subject {
        id: "language-arts",
        title: "Language Arts",
        description: "Reading, writing, and literature",
        image: "https://images.unsplash.com/photo-1456513080510-7bf3a84b82f8?w=600&h=400&fit=crop&q=80",
        accent: "blue",
        overview: "Our Language Arts curriculum develops proficient readers, confident writers, and articulate communicators. We use a balanced literacy approach that includes phonics, reading comprehension, creative writing, grammar, and public speaking.",
        outcomes: &[
            "Decode and comprehend age-appropriate texts",
            "Express ideas clearly through various writing forms",
            "Develop strong vocabulary and grammar skills",
            "Analyze literary elements in stories and poems",
            "Present information confidently and persuasively",
            "Appreciate diverse literary genres and cultures",
        ],
        curriculum: &[
            GradeFocus { grade: "Kindergarten", focus: "Letter recognition, phonics, basic sight words, storytelling" },
            GradeFocus { grade: "Grade 1-2", focus: "Reading fluency, simple sentence writing, spelling patterns" },
            GradeFocus { grade: "Grade 3-4", focus: "Reading comprehension strategies, paragraph writing, research skills" },
            GradeFocus { grade: "Grade 5", focus: "Literary analysis, essay writing, formal presentations" },
        ],
        materials: &[
            "Diverse library collection including Islamic literature",
            "Phonics and reading intervention programs",
            "Writing workshop materials and journals",
            "Digital literacy tools and educational software",
            "Age-appropriate novels and chapter books",
        ],
    },
    Subject {
        id: "mathematics",
        title: "Mathematics",
        description: "Problem-solving and critical thinking",
        image: "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=600&h=400&fit=crop&q=80",
        accent: "indigo",
        overview: "Our math program builds conceptual understanding through hands-on exploration, real-world applications, and systematic skill development. We emphasize critical thinking, problem-solving strategies, and mathematical reasoning.",
        outcomes: &[
            "Master fundamental arithmetic operations",
            "Understand and apply mathematical concepts",
            "Solve multi-step word problems effectively",
            "Recognize patterns and make predictions",
            "Use mathematical tools and technology",
            "Connect math to real-world situations",
        ],
        curriculum: &[
            GradeFocus { grade: "Kindergarten", focus: "Number sense, counting, shapes, basic patterns" },
            GradeFocus { grade: "Grade 1-2", focus: "Addition, subtraction, place value, measurement basics" },
            GradeFocus { grade: "Grade 3-4", focus: "Multiplication, division, fractions, geometry" },
            GradeFocus { grade: "Grade 5", focus: "Decimals, percentages, algebraic thinking, data analysis" },
        ],
        materials: &[
            "Manipulatives for hands-on learning",
            "Interactive math software and apps",
            "Problem-solving workbooks and challenges",
            "Geometric tools and measurement instruments",
            "Real-world math project materials",
        ],
    },
    Subject {
        id: "science",
        title: "Science",
        description: "Exploration and discovery",
        image: "https://images.unsplash.com/photo-1532094349884-543bc11b234d?w=600&h=400&fit=crop&q=80",
        accent: "cyan",
        overview: "Our science curriculum encourages students to ask questions, conduct investigations, and understand the natural world around them. We integrate Islamic perspectives on creation and stewardship of Earth.",
        outcomes: &[
            "Apply the scientific method to investigations",
            "Understand fundamental concepts in life, earth, and physical sciences",
            "Make observations and collect data systematically",
            "Explain scientific phenomena using evidence",
            "Appreciate Allah's creation and natural wonders",
            "Practice environmental stewardship",
        ],
        curriculum: &[
            GradeFocus { grade: "Kindergarten", focus: "Five senses, living vs non-living, weather observations" },
            GradeFocus { grade: "Grade 1-2", focus: "Plants and animals, simple machines, states of matter" },
            GradeFocus { grade: "Grade 3-4", focus: "Ecosystems, energy forms, water cycle, human body" },
            GradeFocus { grade: "Grade 5", focus: "Earth science, chemistry basics, forces and motion" },
        ],
        materials: &[
            "Science lab equipment and safety gear",
            "Living organisms and habitat models",
            "Experiment kits and supplies",
            "Digital simulations and virtual labs",
            "Field trip experiences to nature centers",
        ],
    },
    Subject {
        id: "social-studies",
        title: "Social Studies",
        description: "History, geography, and culture",
        image: "https://images.unsplash.com/photo-1526778548025-fa2f459cd5c1?w=600&h=400&fit=crop&q=80",
        accent: "orange",
        overview: "Our Social Studies program helps students understand their place in the world, from family and community to nations and global citizenship. Islamic history and the contributions of Muslim civilizations are woven through every strand.",
        outcomes: &[
            "Understand community roles, rules, and responsibilities",
            "Read and create maps, globes, and timelines",
            "Explore the history and geography of world cultures",
            "Learn the contributions of Islamic civilization",
            "Practice respectful discussion of different perspectives",
            "Develop the habits of an informed, engaged citizen",
        ],
        curriculum: &[
            GradeFocus { grade: "Kindergarten", focus: "Family, classroom community, basic needs and wants" },
            GradeFocus { grade: "Grade 1-2", focus: "Neighborhoods, maps, community helpers, traditions" },
            GradeFocus { grade: "Grade 3-4", focus: "Regions, early civilizations, Islamic golden age" },
            GradeFocus { grade: "Grade 5", focus: "World geography, government, economics, current events" },
        ],
        materials: &[
            "Maps, globes, and atlas sets",
            "Primary source readers and biographies",
            "Islamic history storybooks and timelines",
            "Model-building and project supplies",
            "Virtual field trips and documentary library",
        ],
    },
    Subject {
        id: "arabic",
        title: "Arabic Language",
        description: "Speaking, reading, and writing",
        image: "https://images.unsplash.com/photo-1455390582262-044cdead277a?w=600&h=400&fit=crop&q=80",
        accent: "rose",
        overview: "Our Arabic program builds listening, speaking, reading, and writing skills through immersive, age-appropriate instruction. Students learn the language of the Quran while developing practical conversational ability.",
        outcomes: &[
            "Recognize and write the Arabic alphabet fluently",
            "Build everyday conversational vocabulary",
            "Read short texts with correct pronunciation",
            "Understand core grammar patterns",
            "Connect Arabic study to Quranic understanding",
            "Appreciate Arabic literature and culture",
        ],
        curriculum: &[
            GradeFocus { grade: "Kindergarten", focus: "Alphabet sounds, greetings, colors and numbers" },
            GradeFocus { grade: "Grade 1-2", focus: "Letter joining, simple words, classroom phrases" },
            GradeFocus { grade: "Grade 3-4", focus: "Sentence building, short readings, basic grammar" },
            GradeFocus { grade: "Grade 5", focus: "Paragraph writing, dialogues, introductory morphology" },
        ],
        materials: &[
            "Leveled Arabic readers and workbooks",
            "Flashcards and vocabulary games",
            "Arabic calligraphy practice sets",
            "Audio and video immersion resources",
            "Interactive language-learning software",
        ],
    },
    Subject {
        id: "arts",
        title: "Creative Arts",
        description: "Visual arts and creativity",
        image: "https://images.unsplash.com/photo-1513364776144-60967b0f800f?w=600&h=400&fit=crop&q=80",
        accent: "pink",
        overview: "Our Creative Arts program gives students room to imagine, design, and make. From drawing and painting to Islamic geometric art and calligraphy, students develop fine motor skills, visual literacy, and confidence in self-expression.",
        outcomes: &[
            "Experiment with a range of media and techniques",
            "Study Islamic geometric patterns and calligraphy",
            "Plan, draft, and refine original artworks",
            "Describe and critique art respectfully",
            "Connect art to history, culture, and faith",
            "Exhibit finished work with pride",
        ],
        curriculum: &[
            GradeFocus { grade: "Kindergarten", focus: "Color, shape, cutting and pasting, free drawing" },
            GradeFocus { grade: "Grade 1-2", focus: "Painting, collage, simple patterns and printmaking" },
            GradeFocus { grade: "Grade 3-4", focus: "Geometric design, perspective basics, clay work" },
            GradeFocus { grade: "Grade 5", focus: "Calligraphy, mixed media projects, portfolio building" },
        ],
        materials: &[
            "Drawing, painting, and printmaking supplies",
            "Islamic pattern and calligraphy templates",
            "Clay, textiles, and sculpture materials",
            "Art history visual library",
            "Display frames for student exhibitions",
        ],
    },
    Subject {
        id: "music",
        title: "Nasheed & Music",
        description: "Islamic songs and rhythm",
        image: "https://images.unsplash.com/photo-1507838153414-b4b713384a76?w=600&h=400&fit=crop&q=80",
        accent: "violet",
        overview: "Our Nasheed program develops rhythm, voice, and an ear for melody through Islamic songs and percussion. Students build performance confidence while memorizing nasheeds that reinforce the values they learn across the school day.",
        outcomes: &[
            "Sing in unison and simple harmony",
            "Keep steady rhythm with voice and percussion",
            "Memorize a repertoire of classic nasheeds",
            "Understand basic musical notation",
            "Perform confidently for an audience",
            "Connect song themes to Islamic character lessons",
        ],
        curriculum: &[
            GradeFocus { grade: "Kindergarten", focus: "Echo songs, clapping rhythms, movement games" },
            GradeFocus { grade: "Grade 1-2", focus: "Unison singing, simple percussion, call and response" },
            GradeFocus { grade: "Grade 3-4", focus: "Part singing, rhythm notation, daf basics" },
            GradeFocus { grade: "Grade 5", focus: "Ensemble performance, composition, assembly leadership" },
        ],
        materials: &[
            "Classroom percussion instruments",
            "Nasheed songbooks and recordings",
            "Rhythm and notation practice cards",
            "Performance staging and microphones",
            "Audio recording equipment for student work",
        ],
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FaqCategory {
    Admissions,
    Curriculum,
    Fees,
    Schedule,
    Safety,
}

impl FaqCategory {
    pub fn label(self) -> &'static str {
        match self {
            FaqCategory::Admissions => "Admissions",
            FaqCategory::Curriculum => "Curriculum",
            FaqCategory::Fees => "Fees & Payment",
            FaqCategory::Schedule => "Schedule",
            FaqCategory::Safety => "Safety",
        }
    }

    pub const ALL: &'static [FaqCategory] = &[
        FaqCategory::Admissions,
        FaqCategory::Curriculum,
        FaqCategory::Fees,
        FaqCategory::Schedule,
        FaqCategory::Safety,
    ];
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FaqEntry {
    pub category: FaqCategory,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        category: FaqCategory::Admissions,
        question: "What is the admission process for Nur Al-Ilm Academy?",
        answer: "Our admission process begins with an online application form, followed by a campus tour and parent-teacher meeting. We review each application holistically, considering the child's readiness and family alignment with our Islamic values. Once accepted, we provide a comprehensive orientation to help families transition smoothly into our community.",
    },
    FaqEntry {
        category: FaqCategory::Admissions,
        question: "What age groups do you accept?",
        answer: "We currently accept students from Kindergarten through 5th grade (ages 5-11). Our program is specifically designed for elementary education, providing age-appropriate Islamic and academic instruction. We assess each child's developmental readiness during the admission process to ensure the best fit.",
    },
    FaqEntry {
        category: FaqCategory::Curriculum,
        question: "How do you balance Islamic studies with academics?",
        answer: "Our curriculum integrates Islamic values throughout the day while maintaining rigorous academic standards. Students receive dedicated Quran, Arabic, and Islamic Studies classes, while core subjects like Math, Science, and Language Arts incorporate Islamic perspectives. This holistic approach ensures students excel both spiritually and academically.",
    },
    FaqEntry {
        category: FaqCategory::Curriculum,
        question: "What teaching methodology do you use?",
        answer: "We employ a blend of traditional and modern teaching methods, including project-based learning, collaborative activities, and individualized instruction. Our small class sizes (12:1 ratio) allow teachers to tailor their approach to each student's learning style while maintaining high standards and expectations.",
    },
    FaqEntry {
        category: FaqCategory::Fees,
        question: "What are the tuition fees and payment options?",
        answer: "Our annual tuition varies by grade level. We offer flexible payment plans including monthly, quarterly, and annual options. Financial assistance is available for qualifying families. Please contact our admissions office for detailed fee structures and to discuss payment arrangements that work for your family.",
    },
    FaqEntry {
        category: FaqCategory::Fees,
        question: "Are there any additional fees besides tuition?",
        answer: "In addition to tuition, there is a one-time registration fee and annual technology fee. Field trips, extracurricular activities, and uniform costs are separate. We maintain transparency in all costs and provide families with a complete breakdown during the admission process.",
    },
    FaqEntry {
        category: FaqCategory::Schedule,
        question: "What are your school hours?",
        answer: "Our regular school day runs from 8:00 AM to 3:30 PM, Monday through Friday. We offer extended care programs from 7:00 AM and until 6:00 PM for working families. Half-day Kindergarten runs from 8:00 AM to 12:00 PM, with full-day options also available.",
    },
    FaqEntry {
        category: FaqCategory::Schedule,
        question: "Do you follow a traditional school calendar?",
        answer: "We follow a modified traditional calendar with breaks aligned with both Islamic holidays and standard school holidays. Our academic year runs from late August to early June, with winter, spring, and summer breaks. We also observe major Islamic holidays including Eid al-Fitr and Eid al-Adha.",
    },
    FaqEntry {
        category: FaqCategory::Safety,
        question: "What safety measures do you have in place?",
        answer: "Safety is our top priority. We maintain secure entry systems, visitor check-in procedures, and comprehensive emergency protocols. All staff undergo background checks and regular safety training. Our facility includes security cameras, and we conduct regular emergency drills. A school nurse is on-site during school hours.",
    },
    FaqEntry {
        category: FaqCategory::Safety,
        question: "How do you handle student wellbeing and discipline?",
        answer: "We foster a nurturing environment based on Islamic principles of respect and compassion. Our positive discipline approach focuses on character development and conflict resolution. We maintain clear behavioral expectations while supporting each child's emotional and social growth through counseling services and restorative practices.",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Block {
    Heading(&'static str),
    Paragraph(&'static str),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    pub accent: &'static str,
    pub body: &'static [Block],
}

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|p| p.slug == slug)
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "building-character-through-islamic-education",
        title: "Building Character Through Islamic Education",
        excerpt: "Discover how our holistic approach integrates Islamic values with modern pedagogy to shape well-rounded individuals.",
        author: "Dr. Amina Hassan",
        role: "Principal",
        date: "March 15, 2025",
        read_time: "8 min read",
        image: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?w=1200&h=600&fit=crop",
        category: "Education",
        accent: "blue",
        body: &[
            Block::Paragraph("In today's rapidly changing world, character education has become more crucial than ever. At Nur Al-Ilm Islamic Academy, we believe that academic excellence must be paired with strong moral foundations rooted in Islamic values."),
            Block::Heading("The Foundation of Character"),
            Block::Paragraph("Islamic education provides a comprehensive framework for character development. The teachings of the Quran and the exemplary life of Prophet Muhammad (peace be upon him) offer timeless guidance on virtues such as honesty, compassion, patience, and integrity. These are not mere abstract concepts but lived values that we integrate into every aspect of our curriculum."),
            Block::Paragraph("Research shows that children who receive values-based education demonstrate better emotional regulation, stronger social skills, and increased empathy towards others. By embedding Islamic ethics into daily lessons, discussions, and activities, we help students internalize these principles naturally."),
            Block::Heading("Practical Application in the Classroom"),
            Block::Paragraph("Our teachers model Islamic character traits and create opportunities for students to practice them. Whether it's showing sabr (patience) when facing academic challenges, demonstrating adl (justice) in peer interactions, or expressing shukr (gratitude) for blessings, students learn through experience."),
            Block::Paragraph("We incorporate character themes into literature studies, use real-world scenarios for ethical discussions, and celebrate students who exemplify Islamic virtues. This holistic approach ensures that character development is not confined to a single class but woven throughout the school day."),
            Block::Heading("Partnership with Families"),
            Block::Paragraph("Character education is most effective when there is consistency between home and school. We partner with families through regular communication, parent workshops, and shared expectations. When children see the same values reinforced in both environments, they develop a strong moral compass that guides them through life."),
            Block::Paragraph("Our monthly character themes are communicated to families with suggested activities and discussion questions, creating a unified approach to nurturing the whole child. Together, we're raising a generation of compassionate, ethical leaders who will make positive contributions to society."),
        ],
    },
    BlogPost {
        slug: "importance-early-childhood-development",
        title: "The Importance of Early Childhood Development",
        excerpt: "Learn why the K-5 years are crucial for cognitive, social, and spiritual growth in children.",
        author: "Sr. Aisha Khan",
        role: "Lead Educator",
        date: "March 10, 2025",
        read_time: "6 min read",
        image: "https://images.unsplash.com/photo-1427504494785-3a9ca7044f45?w=1200&h=600&fit=crop",
        category: "Child Development",
        accent: "emerald",
        body: &[
            Block::Paragraph("The early years of a child's life are a period of remarkable growth and development. During the K-5 years, children's brains form critical neural connections that lay the foundation for all future learning, behavior, and health. Understanding this crucial window helps us appreciate why quality early education matters so much."),
            Block::Heading("Brain Development in Early Years"),
            Block::Paragraph("Neuroscience research reveals that 90% of a child's brain development occurs before age five. During this time, children's brains are exceptionally receptive to learning and environmental influences. Every interaction, experience, and lesson shapes neural pathways that will serve them throughout life."),
            Block::Paragraph("This is why our approach emphasizes rich, multi-sensory learning experiences. We know that young children learn best through play, exploration, and meaningful relationships. Our curriculum is designed to stimulate cognitive development while nurturing emotional and social growth."),
            Block::Heading("Social-Emotional Learning"),
            Block::Paragraph("Beyond academics, early childhood is when children develop essential social-emotional skills. They learn to recognize and manage emotions, build relationships, show empathy, and navigate conflicts. These competencies are predictors of success in school and life."),
            Block::Paragraph("Our Islamic values framework provides an excellent structure for social-emotional learning. Concepts like rahmah (mercy), ta'awun (cooperation), and adab (good manners) give children concrete guidance for interacting positively with others. Through stories of the Prophets and role-playing activities, students practice these skills in safe, supportive environments."),
            Block::Heading("Creating Optimal Learning Environments"),
            Block::Paragraph("Young children thrive in environments that balance structure with flexibility, challenge with support, and independence with guidance. Our small class sizes (12:1 ratio) allow teachers to know each child deeply and tailor instruction to individual needs and interests."),
            Block::Heading("Long-Term Impact"),
            Block::Paragraph("Studies consistently show that children who receive high-quality early education demonstrate better outcomes in literacy, numeracy, school readiness, and social adjustment. These benefits persist well into adolescence and adulthood, influencing everything from graduation rates to career success."),
            Block::Paragraph("We're not just preparing students for the next grade. We're laying groundwork for lifelong learning, strong character, and meaningful contributions to their communities. Investing in early childhood is investing in a brighter future."),
        ],
    },
    BlogPost {
        slug: "balancing-faith-and-academics",
        title: "Balancing Faith and Academics: A Modern Approach",
        excerpt: "How we create harmony between Islamic teachings and contemporary educational standards.",
        author: "Br. Omar Malik",
        role: "Curriculum Director",
        date: "March 5, 2025",
        read_time: "6 min read",
        image: "https://images.unsplash.com/photo-1509062522246-3755977927d7?w=1200&h=600&fit=crop",
        category: "Islamic Studies",
        accent: "violet",
        body: &[
            Block::Paragraph("Parents often ask whether choosing an Islamic school means compromising on academic rigor. Our answer is a confident no. Faith and academics are not competing priorities; designed well, each strengthens the other."),
            Block::Heading("An Integrated Day"),
            Block::Paragraph("Rather than bolting religious instruction onto a secular timetable, we design the school day as one integrated whole. A science lesson on ecosystems becomes an opportunity to discuss stewardship of creation. A history unit examines the scholarship of the Islamic golden age alongside world civilizations. Students never have to choose between their identity and their education."),
            Block::Heading("Standards Without Compromise"),
            Block::Paragraph("Our core academic program follows recognized state standards in mathematics, science, and language arts, and we benchmark student progress against national assessments. Dedicated Quran, Arabic, and Islamic Studies periods run alongside, taught with the same planning discipline and the same expectations of mastery."),
            Block::Paragraph("The result is students who move on to middle school performing at or above grade level while carrying a grounded, articulate understanding of their faith."),
            Block::Heading("Character as the Bridge"),
            Block::Paragraph("The bridge between faith and academics is character. Focus, honesty in one's work, perseverance through difficulty, and gratitude for the opportunity to learn are all taught as Islamic virtues and practiced as study habits. When a child understands that seeking knowledge is an act of worship, motivation stops being a battle."),
        ],
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ContactItem {
    pub title: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
    pub glyph: &'static str,
}

pub const CONTACT_INFO: &[ContactItem] = &[
    ContactItem { title: "Phone", value: SITE.phone, link: Some("tel:+15551234567"), glyph: "📞" },
    ContactItem { title: "Email", value: SITE.email, link: Some("mailto:info@nuralilm.edu"), glyph: "✉" },
    ContactItem { title: "Address", value: SITE.address, link: Some("https://maps.google.com"), glyph: "📍" },
    ContactItem { title: "Hours", value: SITE.hours, link: None, glyph: "🕐" },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

pub const FOOTER_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        title: "School",
        links: &[
            ("About Us", "#about"),
            ("Our Mission", "#about"),
            ("Faculty", "#teachers"),
            ("Admissions", "#contact"),
        ],
    },
    LinkGroup {
        title: "Academics",
        links: &[
            ("Curriculum", "#curriculum"),
            ("Islamic Studies", "/subject/islamic-studies"),
            ("Programs", "#why"),
            ("Resources", "#blog"),
        ],
    },
    LinkGroup {
        title: "Resources",
        links: &[
            ("Blog", "#blog"),
            ("Events", "#blog"),
            ("Parent Portal", "#contact"),
            ("Student Portal", "#contact"),
        ],
    },
    LinkGroup {
        title: "Contact",
        links: &[
            ("Contact Us", "#contact"),
            ("Schedule Visit", "#contact"),
            ("Employment", "#contact"),
            ("Support", "#contact"),
        ],
    },
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "https://facebook.com"),
    ("Twitter", "https://twitter.com"),
    ("Instagram", "https://instagram.com"),
    ("YouTube", "https://youtube.com"),
];

pub const QUICK_REPLIES: &[&str] = &[
    "Enrollment Information",
    "Tuition Fees",
    "School Hours",
    "Curriculum Details",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn blog_slugs_are_unique_and_resolvable() {
        let slugs: HashSet<_> = BLOG_POSTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), BLOG_POSTS.len());
        for post in BLOG_POSTS {
            assert_eq!(find_post(post.slug).map(|p| p.title), Some(post.title));
        }
        assert!(find_post("no-such-post").is_none());
    }

    #[test]
    fn subject_ids_are_unique_and_resolvable() {
        let ids: HashSet<_> = SUBJECTS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SUBJECTS.len());
        for subject in SUBJECTS {
            assert!(find_subject(subject.id).is_some());
            assert_eq!(subject.curriculum.len(), 4, "{} grade rows", subject.id);
            assert!(!subject.outcomes.is_empty());
            assert!(!subject.materials.is_empty());
        }
        assert!(find_subject("underwater-basket-weaving").is_none());
    }

    #[test]
    fn every_faq_category_chip_has_entries() {
        for cat in FaqCategory::ALL {
            assert!(
                FAQS.iter().any(|f| f.category == *cat),
                "no entries for {:?}",
                cat
            );
        }
    }

    #[test]
    fn blog_bodies_start_with_a_lead_paragraph() {
        for post in BLOG_POSTS {
            assert!(matches!(post.body.first(), Some(Block::Paragraph(_))));
        }
    }
}
