//=========================================================================
// Analytics Template Pool
//=========================================================================
//
// The built-in pool of topic templates the question bank draws from.
//
//=========================================================================

use super::QuestionTemplate;

/// Default pool: fourteen data-analytics topics.
pub const ANALYTICS_POOL: &[QuestionTemplate] = &[
    QuestionTemplate {
        topic: "Descriptive Analytics",
        prompt: "Which action best defines the primary goal of Descriptive Analytics?",
        options: [
            "Summarizing raw data to make it interpretable.",
            "Predicting future trends based on past patterns.",
            "Recommending specific actions to optimize outcomes.",
            "Determining the root cause of a past event.",
        ],
        correct: 0,
    },
    QuestionTemplate {
        topic: "Diagnostic Analytics",
        prompt: "When performing Diagnostic Analytics, what is the key question being asked?",
        options: [
            "What will happen next?",
            "How can we make it happen?",
            "Why did it happen?",
            "What is happening right now?",
        ],
        correct: 2,
    },
    QuestionTemplate {
        topic: "Predictive Modelling",
        prompt: "Which technique is most commonly associated with Predictive Modelling?",
        options: [
            "Data Aggregation and Mining",
            "Regression Analysis and Forecasting",
            "Optimization and Simulation",
            "Root Cause Analysis",
        ],
        correct: 1,
    },
    QuestionTemplate {
        topic: "Prescriptive Analytics",
        prompt: "Prescriptive Analytics differs from Predictive Analytics by:",
        options: [
            "Focusing solely on historical data.",
            "Providing probabilistic forecasts only.",
            "Suggesting decision options and showing their implications.",
            "Visualizing data for better readability.",
        ],
        correct: 2,
    },
    QuestionTemplate {
        topic: "Big Data Architecture",
        prompt: "In Big Data Architecture, what is the primary purpose of a 'Data Lake'?",
        options: [
            "Storing structured data for transactional processing.",
            "Storing vast amounts of raw data in its native format.",
            "Visualizing real-time data streams.",
            "Caching frequently accessed database queries.",
        ],
        correct: 1,
    },
    QuestionTemplate {
        topic: "Machine Learning Concepts",
        prompt: "What is 'Overfitting' in the context of Machine Learning models?",
        options: [
            "The model performs poorly on both training and test data.",
            "The model learns the training data too well, including noise, failing to generalize.",
            "The model is too simple to capture the underlying structure of the data.",
            "The model requires too much computational power to train.",
        ],
        correct: 1,
    },
    QuestionTemplate {
        topic: "Data Visualization",
        prompt: "Which principle is crucial for effective Data Visualization?",
        options: [
            "Maximizing the 'data-ink' ratio.",
            "Using as many colors as possible to distinguish categories.",
            "Always using 3D charts for better depth.",
            "Including every available data point on a single chart.",
        ],
        correct: 0,
    },
    QuestionTemplate {
        topic: "Statistical Significance",
        prompt: "What does a P-value indicate in hypothesis testing?",
        options: [
            "The probability that the null hypothesis is true.",
            "The exact probability of the alternative hypothesis.",
            "The probability of observing the results assuming the null hypothesis is true.",
            "The magnitude of the effect size.",
        ],
        correct: 2,
    },
    QuestionTemplate {
        topic: "Ethics in AI",
        prompt: "Which of the following is a major concern regarding Ethics in AI?",
        options: [
            "AI models processing data too slowly.",
            "Algorithmic bias reinforcing historical inequalities.",
            "AI replacing all human jobs immediately.",
            "The cost of cloud storage for AI models.",
        ],
        correct: 1,
    },
    QuestionTemplate {
        topic: "Cloud Computing",
        prompt: "What is a key benefit of 'Elasticity' in Cloud Computing for data analytics?",
        options: [
            "Permanent storage of data on physical tapes.",
            "The ability to scale resources up or down based on demand.",
            "Fixed pricing regardless of usage.",
            "Manual allocation of server racks.",
        ],
        correct: 1,
    },
    QuestionTemplate {
        topic: "Data Cleaning",
        prompt: "What is the primary goal of 'Imputation' in data preprocessing?",
        options: [
            "Removing all rows with missing values.",
            "Replacing missing data with substituted values.",
            "Normalizing the scale of numeric features.",
            "Encoding categorical variables.",
        ],
        correct: 1,
    },
    QuestionTemplate {
        topic: "Deep Learning",
        prompt: "Which neural network architecture is best suited for image recognition?",
        options: [
            "Recurrent Neural Networks (RNN)",
            "Convolutional Neural Networks (CNN)",
            "Multilayer Perceptrons (MLP)",
            "K-Means Clustering",
        ],
        correct: 1,
    },
    QuestionTemplate {
        topic: "NLP",
        prompt: "In Natural Language Processing, what does 'Tokenization' refer to?",
        options: [
            "Translating text from one language to another.",
            "Breaking down text into smaller units like words or subwords.",
            "Assigning sentiment scores to sentences.",
            "Generating new text from a prompt.",
        ],
        correct: 1,
    },
    QuestionTemplate {
        topic: "A/B Testing",
        prompt: "What is the purpose of the 'Control Group' in an A/B test?",
        options: [
            "To receive the new feature being tested.",
            "To provide a baseline for comparison against the variant.",
            "To ensure the sample size is large enough.",
            "To eliminate outliers from the dataset.",
        ],
        correct: 1,
    },
];
