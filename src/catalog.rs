//! Static per-algorithm metadata shown alongside the visualization
//!
//! Complexity classes, a short description, the reference C listing for the
//! code pane, and pros/cons.  Pure data; the trace engine neither depends on
//! nor produces any of it.

use crate::trace::SortAlgorithm;

/// Human-readable facts about one algorithm.
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmInfo {
    pub best_case: &'static str,
    pub average_case: &'static str,
    pub worst_case: &'static str,
    pub space: &'static str,
    pub description: &'static str,
    /// Reference C implementation rendered in the code pane.
    pub code: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

/// Look up the metadata for an algorithm.
pub fn info(algorithm: SortAlgorithm) -> &'static AlgorithmInfo {
    match algorithm {
        SortAlgorithm::Bubble => &BUBBLE,
        SortAlgorithm::Selection => &SELECTION,
        SortAlgorithm::Insertion => &INSERTION,
        SortAlgorithm::Merge => &MERGE,
        SortAlgorithm::Quick => &QUICK,
        SortAlgorithm::Heap => &HEAP,
        SortAlgorithm::Shell => &SHELL,
    }
}

static BUBBLE: AlgorithmInfo = AlgorithmInfo {
    best_case: "O(n)",
    average_case: "O(n²)",
    worst_case: "O(n²)",
    space: "O(1)",
    description: "A simple sorting algorithm that repeatedly steps through the list, \
compares adjacent elements and swaps them if they are in the wrong order.",
    code: "void bubbleSort(int arr[], int n) {
    int i, j, temp;
    for (i = 0; i < n - 1; i++) {
        for (j = 0; j < n - i - 1; j++) {
            if (arr[j] > arr[j + 1]) {
                temp = arr[j];
                arr[j] = arr[j + 1];
                arr[j + 1] = temp;
            }
        }
    }
}",
    pros: &["Simple to implement", "Stable", "In-place"],
    cons: &["Very inefficient for large datasets"],
};

static SELECTION: AlgorithmInfo = AlgorithmInfo {
    best_case: "O(n²)",
    average_case: "O(n²)",
    worst_case: "O(n²)",
    space: "O(1)",
    description: "Divides the input list into a sorted sublist built up from left to \
right and a sublist of the remaining unsorted items.",
    code: "void selectionSort(int arr[], int n) {
    int i, j, min_idx, temp;
    for (i = 0; i < n - 1; i++) {
        min_idx = i;
        for (j = i + 1; j < n; j++)
            if (arr[j] < arr[min_idx])
                min_idx = j;
        temp = arr[min_idx];
        arr[min_idx] = arr[i];
        arr[i] = temp;
    }
}",
    pros: &["Simple", "In-place", "Useful when memory writing is costly"],
    cons: &["O(n²) regardless of data distribution", "Unstable"],
};

static INSERTION: AlgorithmInfo = AlgorithmInfo {
    best_case: "O(n)",
    average_case: "O(n²)",
    worst_case: "O(n²)",
    space: "O(1)",
    description: "Builds the final sorted array one item at a time. Much less \
efficient on large lists than more advanced algorithms.",
    code: "void insertionSort(int arr[], int n) {
    int i, key, j;
    for (i = 1; i < n; i++) {
        key = arr[i];
        j = i - 1;
        while (j >= 0 && arr[j] > key) {
            arr[j + 1] = arr[j];
            j = j - 1;
        }
        arr[j + 1] = key;
    }
}",
    pros: &["Efficient for small data sets", "Adaptive", "Stable", "Online"],
    cons: &["Inefficient for large datasets"],
};

static MERGE: AlgorithmInfo = AlgorithmInfo {
    best_case: "O(n log n)",
    average_case: "O(n log n)",
    worst_case: "O(n log n)",
    space: "O(n)",
    description: "An efficient, stable, comparison-based, divide and conquer sorting \
algorithm.",
    code: "void merge(int arr[], int l, int m, int r) {
    int n1 = m - l + 1, n2 = r - m;
    int L[n1], R[n2];
    for (int i = 0; i < n1; i++) L[i] = arr[l + i];
    for (int j = 0; j < n2; j++) R[j] = arr[m + 1 + j];
    int i = 0, j = 0, k = l;
    while (i < n1 && j < n2) {
        if (L[i] <= R[j]) arr[k++] = L[i++];
        else arr[k++] = R[j++];
    }
    while (i < n1) arr[k++] = L[i++];
    while (j < n2) arr[k++] = R[j++];
}

void mergeSort(int arr[], int l, int r) {
    if (l < r) {
        int m = l + (r - l) / 2;
        mergeSort(arr, l, m);
        mergeSort(arr, m + 1, r);
        merge(arr, l, m, r);
    }
}",
    pros: &["Consistent O(n log n)", "Stable", "Parallelizable"],
    cons: &["Requires extra space O(n)", "Not in-place"],
};

static QUICK: AlgorithmInfo = AlgorithmInfo {
    best_case: "O(n log n)",
    average_case: "O(n log n)",
    worst_case: "O(n²)",
    space: "O(log n)",
    description: "A divide-and-conquer algorithm that picks an element as pivot and \
partitions the given array around the picked pivot.",
    code: "int partition(int arr[], int low, int high) {
    int pivot = arr[high];
    int i = (low - 1);
    for (int j = low; j <= high - 1; j++) {
        if (arr[j] < pivot) {
            i++;
            swap(&arr[i], &arr[j]);
        }
    }
    swap(&arr[i + 1], &arr[high]);
    return (i + 1);
}

void quickSort(int arr[], int low, int high) {
    if (low < high) {
        int pi = partition(arr, low, high);
        quickSort(arr, low, pi - 1);
        quickSort(arr, pi + 1, high);
    }
}",
    pros: &["Very fast in practice", "In-place", "Good cache locality"],
    cons: &["O(n²) worst case", "Unstable", "Fragile pivot selection"],
};

static HEAP: AlgorithmInfo = AlgorithmInfo {
    best_case: "O(n log n)",
    average_case: "O(n log n)",
    worst_case: "O(n log n)",
    space: "O(1)",
    description: "A comparison-based sorting algorithm that uses a binary heap data \
structure.",
    code: "void heapify(int arr[], int n, int i) {
    int largest = i;
    int l = 2 * i + 1;
    int r = 2 * i + 2;
    if (l < n && arr[l] > arr[largest]) largest = l;
    if (r < n && arr[r] > arr[largest]) largest = r;
    if (largest != i) {
        swap(&arr[i], &arr[largest]);
        heapify(arr, n, largest);
    }
}

void heapSort(int arr[], int n) {
    for (int i = n / 2 - 1; i >= 0; i--) heapify(arr, n, i);
    for (int i = n - 1; i > 0; i--) {
        swap(&arr[0], &arr[i]);
        heapify(arr, i, 0);
    }
}",
    pros: &["Consistent O(n log n)", "In-place", "No worst-case O(n²)"],
    cons: &["Unstable", "Slower than quicksort in practice"],
};

static SHELL: AlgorithmInfo = AlgorithmInfo {
    best_case: "O(n log n)",
    average_case: "O(n log n) or O(n^1.25)",
    worst_case: "O(n²)",
    space: "O(1)",
    description: "An optimization of insertion sort that allows the exchange of items \
that are far apart.",
    code: "void shellSort(int arr[], int n) {
    for (int gap = n/2; gap > 0; gap /= 2) {
        for (int i = gap; i < n; i++) {
            int temp = arr[i];
            int j;
            for (j = i; j >= gap && arr[j - gap] > temp; j -= gap)
                arr[j] = arr[j - gap];
            arr[j] = temp;
        }
    }
}",
    pros: &["Efficient for medium-sized arrays", "In-place"],
    cons: &["Complexity depends on gap sequence", "Unstable"],
};
